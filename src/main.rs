use pairs::ui::app;

fn main() -> glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = app::load_config();
    app::run(config)
}
