use qc_core::board::group_by_module;
use qc_core::filter::visible_rules;
use qc_core::responses::{ModuleRules, RuleListResponse, RuleView};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::filter_args::build_filter;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_rows;

pub fn run(args: &FilterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = ctx.store.board();
    let filter = build_filter(args, &ctx.config)?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let mut rules = visible_rules(board, &filter);
    let total = u32::try_from(rules.len())?;
    rules.truncate(limit);

    let modules = group_by_module(&rules)
        .into_iter()
        .map(|group| ModuleRules {
            module_name: group.module_name.to_string(),
            rules: group
                .rules
                .into_iter()
                .map(|rule| RuleView::build(board, rule))
                .collect(),
        })
        .collect();

    output_rows(&RuleListResponse { modules, total }, flags.format)
}
