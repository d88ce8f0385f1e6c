fn main() {
    env_logger::init();

    #[cfg(windows)]
    if let Err(error) = huecycle::app::run() {
        eprintln!("huecycle: {error}");
        std::process::exit(1);
    }

    #[cfg(not(windows))]
    {
        eprintln!("huecycle renders through Win32 and WGL; this platform is unsupported");
        std::process::exit(1);
    }
}
