use anyhow::{bail, Result};

const DEFAULT_INSTRUCTIONS: u64 = 1_000_000;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path = match args.next() {
        Some(path) => path,
        None => bail!("usage: pocketboy <rom_path> [max_instructions]"),
    };

    let max_instructions = match args.next() {
        Some(count) => count
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid instruction count '{count}'"))?,
        None => {
            log::info!("no instruction limit given, defaulting to {DEFAULT_INSTRUCTIONS}");
            DEFAULT_INSTRUCTIONS
        }
    };

    pocketboy::run(&rom_path, max_instructions)
}
