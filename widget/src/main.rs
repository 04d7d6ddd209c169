use crate::error::StackTrace;
use crate::handler::AppModule;
use error_stack::Report;
use kernel::KernelError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod error;
mod handler;
mod presenter;
mod terminal;
mod view;
mod viewport;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "application=info,driver=info,widget=info".into()
                    }),
                )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let place_id = place_id(std::env::args())?;

    let app = AppModule::new()?;
    terminal::run(app, place_id).await?;

    Ok(())
}

fn place_id(mut args: impl Iterator<Item = String>) -> error_stack::Result<String, KernelError> {
    args.nth(1).ok_or_else(|| {
        Report::new(KernelError::Internal).attach_printable("usage: widget <place-id>")
    })
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use super::place_id;

    #[test]
    fn place_id_is_first_argument() {
        let args = ["widget", "p1"].map(String::from).into_iter();
        assert_eq!(place_id(args).unwrap(), "p1");
    }

    #[test]
    fn missing_place_id_is_a_usage_error() {
        let report = place_id(["widget".to_string()].into_iter()).unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Internal));
    }
}
