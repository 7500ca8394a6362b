use qc_config::QcConfig;
use qc_core::enums::{RuleStatus, ThreadStatus};
use qc_core::filter::{FilterState, Selection};

use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::parse::parse_all;

/// Build a [`FilterState`] from command-line selections.
///
/// Without `--module` or `--all-modules` the configured default module
/// applies. Dimensions are set in cascade order (module, business rule,
/// thread title) so no explicit selection is reset by a later one.
pub fn build_filter(args: &FilterArgs, config: &QcConfig) -> anyhow::Result<FilterState> {
    let mut filter = FilterState::default();

    let module = if args.all_modules {
        None
    } else {
        args.module
            .as_deref()
            .map(str::trim)
            .filter(|module| !module.is_empty())
            .map(str::to_string)
            .or_else(|| config.general.module_filter())
    };
    filter.set_module(module);

    if !args.business_rule.is_empty() {
        filter.update_business_rule(|selection| {
            *selection = Selection::from_values(args.business_rule.iter().cloned());
        });
    }
    *filter.thread_title_mut() = Selection::from_values(args.title.iter().cloned());
    *filter.status_mut() = Selection::from_values(parse_all::<RuleStatus>(&args.status, "status")?);
    *filter.thread_status_mut() =
        Selection::from_values(parse_all::<ThreadStatus>(&args.thread_status, "thread status")?);

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qc_config::QcConfig;
    use qc_core::enums::RuleStatus;
    use qc_core::filter::Selection;

    use super::build_filter;
    use crate::cli::subcommands::FilterArgs;

    fn config_with_module(module: &str) -> QcConfig {
        let mut config = QcConfig::default();
        config.general.default_module = module.to_string();
        config
    }

    #[test]
    fn empty_args_select_everything() {
        let filter = build_filter(&FilterArgs::default(), &QcConfig::default()).unwrap();
        assert_eq!(filter.module(), None);
        assert!(filter.status().is_all());
        assert!(filter.thread_title().is_all());
    }

    #[test]
    fn configured_module_applies_by_default() {
        let filter =
            build_filter(&FilterArgs::default(), &config_with_module("Quality Control")).unwrap();
        assert_eq!(filter.module(), Some("Quality Control"));
    }

    #[test]
    fn all_modules_overrides_configured_module() {
        let args = FilterArgs {
            all_modules: true,
            ..FilterArgs::default()
        };
        let filter = build_filter(&args, &config_with_module("Quality Control")).unwrap();
        assert_eq!(filter.module(), None);
    }

    #[test]
    fn explicit_selections_survive_cascade() {
        let args = FilterArgs {
            module: Some("Warehouse Safety Checks".into()),
            business_rule: vec!["Emergency exits must be clearly marked".into()],
            title: vec!["Exit pathway inspection".into()],
            status: vec!["pass".into(), "n/a".into()],
            ..FilterArgs::default()
        };
        let filter = build_filter(&args, &QcConfig::default()).unwrap();
        assert_eq!(filter.business_rule().values().len(), 1);
        assert_eq!(filter.thread_title().values().len(), 1);
        assert_eq!(
            filter.status(),
            &Selection::from_values([RuleStatus::Pass, RuleStatus::NotApplicable])
        );
    }

    #[test]
    fn bad_status_is_rejected() {
        let args = FilterArgs {
            thread_status: vec!["archived".into()],
            ..FilterArgs::default()
        };
        let err = build_filter(&args, &QcConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid thread status 'archived'"));
    }
}
