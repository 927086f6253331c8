use crate::prelude::{println, *};
use deptest_core::service::{RouteInfo, ROUTES};

#[derive(Debug, clap::Parser)]
#[command(name = "routes")]
#[command(about = "Print the HTTP route table")]
pub struct App {
    /// Only show routes for this HTTP method (e.g. GET, POST)
    #[clap(long)]
    method: Option<String>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let routes = filter_routes(ROUTES, app.method.as_deref());

    if routes.is_empty() {
        return Err(eyre!(
            "No routes for method {}",
            app.method.unwrap_or_default()
        ));
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["METHOD", "PATH", "DESCRIPTION"]);
    for route in &routes {
        table.add_row(prettytable::row![route.method, route.path, route.description]);
    }
    table.printstd();

    if global.verbose {
        println!();
        println!("{} of {} routes", routes.len(), ROUTES.len());
    }

    Ok(())
}

fn filter_routes(routes: &[RouteInfo], method: Option<&str>) -> Vec<RouteInfo> {
    routes
        .iter()
        .filter(|route| method.map_or(true, |m| route.method.eq_ignore_ascii_case(m)))
        .copied()
        .collect()
}
