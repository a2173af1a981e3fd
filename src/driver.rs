use std::io::Write;

use log::{debug, info, warn};

use crate::{
    calc,
    error::{Error, Result},
    options::Options,
    select::{select, Selection},
    sysfs::{scan_dirs, Control, MAX_BRIGHTNESS},
};

/// One run of the tool: discover, select, then either list or adjust.
///
/// Listing wins when both are requested. Listing stops at the first control
/// whose values can't be read.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<()> {
    let controls = scan_dirs(&options.base_dirs)?;
    debug!("found {} brightness controls", controls.len());

    let selection = select(&controls, &options.criteria)?;

    if options.list {
        return list(&controls, selection, out);
    }

    if let Some(adjustment) = options.adjustment {
        let control = match selection {
            Selection::One(control) => control,
            Selection::All => return Err(Error::NoControlSelected),
        };
        let new = adjust(control, options.min, adjustment)?;
        writeln!(out, "Setting backlight to {}", new).map_err(Error::Output)?;
        control.set_brightness(new)?;
        info!("{} set to {}", control.name(), new);
    }

    Ok(())
}

pub fn list<W: Write>(controls: &[Control], selection: Selection<'_>, out: &mut W) -> Result<()> {
    for (index, control) in controls.iter().enumerate() {
        if !selection.includes(control) {
            continue;
        }

        let max = control.max_brightness()?;
        let current = control.brightness()?;
        let percent = match max {
            0 => "-".to_string(),
            max => format!("{:.2}", 100.0 * current as f64 / max as f64),
        };
        writeln!(
            out,
            "{:2}  {:>25}  {:4}  {:4}  {:>6}",
            index,
            control.name(),
            current,
            max,
            percent
        )
        .map_err(Error::Output)?;
    }

    Ok(())
}

/// Reads the control's current state and works out the value to write.
/// A control reporting a maximum of 0 can't be adjusted.
pub fn adjust(control: &Control, min: u64, adjustment: calc::Adjustment) -> Result<u64> {
    let max = control.max_brightness()?;
    if max == 0 {
        return Err(Error::ZeroMaximum {
            path: control.path().join(MAX_BRIGHTNESS),
        });
    }
    let current = control.brightness()?;

    if min > max {
        warn!(
            "minimum {} is above the maximum {} of {}, result depends on the requested value",
            min,
            max,
            control.name()
        );
    }

    let new = calc::compute(max, min, current, adjustment);
    debug!(
        "{}: current {} max {} min {} value {} relative {} percentage {} -> {}",
        control.name(),
        current,
        max,
        min,
        adjustment.value(),
        adjustment.is_relative(),
        adjustment.is_percentage(),
        new
    );

    Ok(new)
}
