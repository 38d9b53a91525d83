use log::{Log, Metadata, Record};

pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        println!("{}: {}", record.level(), record.args());
    }

    fn flush(&self) {}
}
