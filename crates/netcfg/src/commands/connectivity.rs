//! Connectivity probe handler.

use netcfg_core::ConnectivityResult;

use crate::cli::{ConnectivityArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn detail(r: &ConnectivityResult, color: bool) -> String {
    let mut lines = vec![
        format!("Target:    {}", r.target),
        format!("Reachable: {}", output::yes_no(r.success, color)),
    ];
    if r.status_code > 0 {
        lines.push(format!("HTTP:      {}", r.status_code));
    }
    lines.push(format!("Latency:   {} ms", r.duration_ms));
    if !r.error.is_empty() {
        lines.push(format!("Error:     {}", r.error));
    }
    lines.join("\n")
}

pub async fn handle(
    ctx: &super::Context,
    args: ConnectivityArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let result = ctx.store.check_connectivity(args.target.as_deref()).await?;
    let color = output::stdout_color(&global.color);
    let out = output::render_single(
        &global.output,
        &result,
        |r| detail(r, color),
        |r| if r.success { "reachable" } else { "unreachable" }.into(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
