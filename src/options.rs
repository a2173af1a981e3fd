use std::path::PathBuf;

use clap::Parser;

use crate::{
    calc::Adjustment,
    error::Error,
    select::Criteria,
    sysfs::ControlClass,
};

/// Show and set display and LED brightness through sysfs.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Args {
    /// Show list of all brightness controls
    #[clap(short = 'l')]
    pub list: bool,

    /// Select brightness control by id
    #[clap(short = 'i', value_parser, allow_hyphen_values = true, value_name = "ID")]
    pub id: Option<i64>,

    /// Select brightness control by name
    #[clap(short = 'n', value_parser, value_name = "NAME")]
    pub name: Option<String>,

    /// Set/adjust brightness (absolute value, +/- relative value, or either with a trailing %)
    #[clap(short = 's', value_parser, allow_hyphen_values = true, value_name = "VALUE")]
    pub set: Option<String>,

    /// Minimum brightness
    #[clap(short = 'm', value_parser, allow_hyphen_values = true, default_value_t = 0, value_name = "MIN")]
    pub min: i64,
}

/// Validated settings for a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub list: bool,
    pub criteria: Criteria,
    pub adjustment: Option<Adjustment>,
    pub min: u64,
    pub base_dirs: Vec<PathBuf>,
}

impl TryFrom<Args> for Options {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let adjustment = match args.set.as_deref() {
            None | Some("") => None,
            Some(spec) => Some(spec.parse::<Adjustment>()?),
        };

        // -1 is the "unset" id
        let id = match args.id {
            None | Some(-1) => None,
            Some(id) if id < 0 => return Err(Error::InvalidIndex(id)),
            Some(id) => Some(usize::try_from(id).map_err(|_| Error::InvalidIndex(id))?),
        };
        let name = args.name.filter(|name| !name.is_empty());

        let criteria = match (id, name) {
            (Some(_), Some(_)) => return Err(Error::ConflictingSelection),
            (Some(id), None) => Criteria::Index(id),
            (None, Some(name)) => Criteria::Name(name),
            (None, None) if adjustment.is_some() => return Err(Error::MissingSelection),
            (None, None) => Criteria::All,
        };

        Ok(Options {
            list: args.list || adjustment.is_none(),
            criteria,
            adjustment,
            min: u64::try_from(args.min).unwrap_or(0),
            base_dirs: ControlClass::default_dirs(),
        })
    }
}
