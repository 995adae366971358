//! Dashboard Example
//!
//! Wires a small dashboard module with every ngkit annotation, then
//! bootstraps it and prints what the module received.
//!
//! # Usage
//!
//! ```bash
//! NGKIT_LOGGING__LEVEL=debug cargo run --package ngkit-dashboard
//! ```
//!
//! An `ngkit.toml` or `ngkit.yaml` in the working directory is picked up if
//! present.

use anyhow::Result;
use ngkit::prelude::*;
use serde_json::json;
use tracing::info;

/// Services and filters shared by the screens.
fn register_shared(composer: &Composer) -> Result<()> {
    let api = Target::class("DashboardApi");
    decorate!(composer, api => [
        inject(["$http", "$q"]),
        service("dashboardApi"),
    ])?;

    let currency = Target::function("currencyFilter");
    decorate!(composer, currency => [filter("currency")])?;

    // Hooks declared as static members of a bootstrap class.
    let app = Target::class("DashboardApp");
    decorate!(composer, app, "configure" => [inject(["$locationProvider"]), config()])?;
    decorate!(composer, app, "start" => [inject(["$rootScope", "dashboardApi"]), run()])?;

    Ok(())
}

/// A `<stat-card>` element component.
fn register_components(composer: &Composer) -> Result<()> {
    let card = Target::class("StatCardCtrl");
    decorate!(composer, card => [
        inject(["dashboardApi"]),
        view(
            ViewOptions::new()
                .template("<div class=\"card\">{{vm.label}}: {{vm.value}}</div>")
                .bind(json!({ "label": "@", "value": "<" })),
        ),
        component("stat-card"),
    ])?;

    // An attribute directive with its own factory.
    let tooltip = Target::class("Tooltip")
        .with_directive_factory(Target::function("tooltipFactory"));
    decorate!(composer, tooltip => [directive("dash-tooltip")])?;

    Ok(())
}

/// Routing states.
fn register_routes(composer: &Composer) -> Result<()> {
    let overview = Target::class("OverviewCtrl");
    decorate!(composer, overview => [
        inject(["dashboardApi"]),
        route_config("overview", RouteOptions::new().url("/")),
    ])?;

    let reports = Target::class("ReportsCtrl");
    decorate!(composer, reports => [
        route_config(
            "reports",
            json!({ "url": "/reports", "templateUrl": "reports.html", "controllerAs": "reports" }),
        ),
    ])?;

    Ok(())
}

fn main() -> Result<()> {
    let runtime = ToolkitRuntime::new();
    let composer = runtime.composer();

    register_shared(composer)?;
    register_components(composer)?;
    register_routes(composer)?;

    info!("{}", composer.stats());
    let stats = runtime.bootstrap()?;

    let module = runtime.module();
    for name in module.directive_names() {
        info!(directive = %name, "Directive available");
    }
    for name in module.state_names() {
        if let Some(state) = module.get_state(&name) {
            info!(state = %name, definition = %state.to_value(), "State registered");
        }
    }
    for invocation in module.invocations() {
        info!(
            phase = %invocation.phase,
            hook = %invocation.hook,
            dependencies = ?invocation.dependencies,
            "Hook invoked"
        );
    }

    println!("{stats}");
    Ok(())
}
