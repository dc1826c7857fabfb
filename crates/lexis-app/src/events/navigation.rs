use lexis_config::Config;
use lexis_types::Route;

use crate::events::{EventContext, Flow, Shell};

pub fn handle_navigate(
    ctx: &EventContext,
    shell: &mut Shell,
    route: Route,
    config: &Config,
) -> anyhow::Result<Flow> {
    shell.navigator.navigate(route);
    shell.mount(route, config, ctx.state.audio.as_ref())?;
    Ok(Flow::Redraw)
}

/// Pop the back stack. The previous screen is mounted fresh.
pub async fn handle_back(
    ctx: &EventContext,
    shell: &mut Shell,
    config: &Config,
) -> anyhow::Result<Flow> {
    match shell.navigator.back() {
        Some(route) => {
            shell.mount(route, config, ctx.state.audio.as_ref())?;
            Ok(Flow::Redraw)
        }
        None => {
            ctx.notice("already on the first screen").await?;
            Ok(Flow::Idle)
        }
    }
}
