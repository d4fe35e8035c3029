//! Top level subcommands

pub(crate) mod command;
pub(crate) mod create;
pub(crate) mod creatives;
pub(crate) mod line_items;
pub(crate) mod lookup;
pub(crate) mod placements;
