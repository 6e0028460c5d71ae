use envbind::Bindable;

#[derive(Bindable)]
pub struct Port(pub i64);

fn main() {
    let _ = Port(1).0;
}
