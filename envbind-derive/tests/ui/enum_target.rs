use envbind::Bindable;

#[derive(Bindable)]
enum Mode {
    Fast,
}

fn main() {
    let _ = Mode::Fast;
}
