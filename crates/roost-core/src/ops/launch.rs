use tracing::info;

use super::{OpsContext, OpsError};
use crate::launch::{LaunchMode, LaunchPlan, plan_launch, resolve_target};

/// Resolve `token` and work out how to open it. Nothing is launched.
pub fn prepare_launch(
    ctx: &mut OpsContext<'_>,
    token: &str,
    mode: LaunchMode,
) -> Result<LaunchPlan, OpsError> {
    info!(event = "core.launch.prepare_started", token = token, mode = ?mode);

    let catalog = ctx.store.load()?;
    let target = resolve_target(&catalog, token)?;
    let plan = plan_launch(&catalog, target, mode, ctx.fs, ctx.git, ctx.config)?;
    Ok(plan)
}
