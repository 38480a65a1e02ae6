use anyhow::Result;
use tplbridge::cli::App;

fn main() -> Result<()> {
    let app = App::from_env();
    app.run()
}
