//! Thin entrypoint delegating to `kanban_smoke::run()`.

#[tokio::main]
async fn main() {
    let code = kanban_smoke::run().await;
    std::process::exit(code);
}
