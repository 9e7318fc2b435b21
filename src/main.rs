mod app;
mod config;
mod error;
mod library;
mod logging;
mod runtime;
mod tags;
mod ui;

#[cfg(test)]
mod test_support;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
