/// Инициализировать `env_logger` для бинарников.
///
/// Уровень берётся из `RUST_LOG`, по умолчанию `info`.
/// Повторный вызов ничего не делает.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
