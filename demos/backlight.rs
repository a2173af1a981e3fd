use blctl::{
    calc,
    sysfs::{
        Control,
        ControlClass,
    },
};

use clap::Parser;
use anyhow::Result;
use anyhow::anyhow;

#[derive(Parser, Debug)]
struct Args {
    /// Relative or absolute value, e.g. `+10%`
    #[clap(short = 's', long, value_parser, allow_hyphen_values = true)]
    set_brightness: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let backlight: Vec<Control> = ControlClass::Backlight.enum_controls()?;
    if backlight.is_empty() {
        return Err(anyhow!("Failed to find backlight device"))
    }

    let dev = &backlight[0];
    println!("{}: {}/{}", dev.name(), dev.brightness()?, dev.max_brightness()?);

    if let Some(spec) = args.set_brightness {
        let new = calc::compute(dev.max_brightness()?, 0, dev.brightness()?, spec.parse()?);
        dev.set_brightness(new)?;
        println!("{}: {}", dev.name(), new);
    }

    Ok(())
}
