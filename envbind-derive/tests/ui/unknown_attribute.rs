use envbind::Bindable;

#[derive(Bindable)]
pub struct Config {
    #[env(default = 8080)]
    pub port: i64,
}

fn main() {
    let _ = Config { port: 1 }.port;
}
