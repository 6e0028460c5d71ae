use envbind::Bindable;

#[derive(Bindable)]
#[env(prefix = 1)]
pub struct Config {
    pub port: i64,
}

fn main() {
    let _ = Config { port: 1 }.port;
}
