use std::ffi::OsStr;

use log::debug;

use crate::{
    error::{Error, Result},
    sysfs::Control,
};

/// Which control the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Criteria {
    Index(usize),
    Name(String),
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    All,
    One(&'a Control),
}

impl<'a> Selection<'a> {
    #[inline]
    pub fn includes(&self, control: &Control) -> bool {
        match self {
            Selection::All => true,
            Selection::One(selected) => *selected == control,
        }
    }
}

/// Resolves `criteria` against the discovered controls. Names match the
/// last path component exactly and the first match wins.
pub fn select<'a>(controls: &'a [Control], criteria: &Criteria) -> Result<Selection<'a>> {
    match criteria {
        Criteria::Index(index) => {
            debug!("selecting by id {}", index);
            controls
                .get(*index)
                .map(Selection::One)
                .ok_or(Error::IndexNotFound(*index))
        }
        Criteria::Name(name) => {
            debug!("selecting by name `{}'", name);
            controls
                .iter()
                .find(|control| control.path().file_name() == Some(OsStr::new(name)))
                .map(Selection::One)
                .ok_or_else(|| Error::NameNotFound(name.clone()))
        }
        Criteria::All => {
            debug!("selecting all");
            Ok(Selection::All)
        }
    }
}
