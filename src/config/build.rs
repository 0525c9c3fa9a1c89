use super::types::{RouteEntry, RouteFile};
use crate::router::{
    redirect, resources, MethodFilter, PathPattern, RouteDeclaration, RouteTable, Target,
};
use anyhow::Context;

fn declarations(entry: &RouteEntry) -> anyhow::Result<Vec<RouteDeclaration>> {
    let declared = match entry {
        RouteEntry::Dispatch { method, path, to } => vec![RouteDeclaration::Dispatch {
            method: MethodFilter::parse(method)?,
            pattern: path.as_str().into(),
            target: to.parse::<Target>()?,
        }],
        RouteEntry::Regex { method, pattern, to } => vec![RouteDeclaration::Dispatch {
            method: MethodFilter::parse(method)?,
            pattern: PathPattern::regex(pattern)?,
            target: to.parse::<Target>()?,
        }],
        RouteEntry::Redirect { method, path, to } => {
            vec![redirect(MethodFilter::parse(method)?, path.as_str(), to.as_str())]
        }
        RouteEntry::Resources { controller } => resources(controller),
    };
    Ok(declared)
}

/// Turn a parsed route file into a table, preserving entry order.
pub fn build_table(file: &RouteFile) -> anyhow::Result<RouteTable> {
    let mut table = RouteTable::new();
    for (index, entry) in file.routes.iter().enumerate() {
        let declared = declarations(entry)
            .with_context(|| format!("invalid route entry #{}: {:?}", index, entry))?;
        table.extend(declared);
    }
    Ok(table)
}
