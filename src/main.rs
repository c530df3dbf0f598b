use faretrack::app::App;
use faretrack::config::TrackerConfig;
use faretrack::Result;

fn main() -> Result<()> {
    let config = TrackerConfig::load()?;

    let mut app = App::new(&config)?;
    app.init()?;
    let result = app.run();
    app.shutdown()?;

    result
}
