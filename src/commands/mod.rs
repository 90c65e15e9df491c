pub mod pick;
pub mod replay;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::PickerConfig;
use crate::host::PickerOptions;
use crate::picker::{parse_date, DateBounds, Selection};

/// Picker arguments shared by the commands, as typed on the command line
#[derive(Debug, Clone, Default)]
pub struct PickerArgs {
    pub name: Option<String>,
    pub selected: Option<String>,
    pub anchor: Option<String>,
    pub months: Option<u8>,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Parse an optional YYYY-MM-DD argument
pub fn parse_date_arg(date: Option<&str>) -> Result<Option<NaiveDate>> {
    date.map(|s| {
        parse_date(s).with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", s))
    })
    .transpose()
}

/// Parse an optional selection argument (`none`, `DATE..`, `DATE..DATE`)
pub fn parse_selection_arg(selection: Option<&str>) -> Result<Selection> {
    match selection {
        Some(s) => s
            .parse()
            .with_context(|| format!("Invalid selection '{}'. Use YYYY-MM-DD..YYYY-MM-DD", s)),
        None => Ok(Selection::None),
    }
}

/// Merge command-line arguments over the configured defaults
pub fn picker_options(config: &PickerConfig, args: &PickerArgs) -> Result<PickerOptions> {
    let mut options = PickerOptions::from_config(config);
    if let Some(name) = &args.name {
        options.name = name.clone();
    }
    if let Some(months) = args.months {
        options.months_shown = months;
    }
    options.selected = parse_selection_arg(args.selected.as_deref())?;
    options.anchor = parse_date_arg(args.anchor.as_deref())?;
    options.bounds = DateBounds::new(
        parse_date_arg(args.min.as_deref())?,
        parse_date_arg(args.max.as_deref())?,
    );
    Ok(options)
}
