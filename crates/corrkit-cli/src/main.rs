mod command;
mod data;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
