use crate::model::{PackageModel, Symbol};
use crate::rank::RankTable;

pub fn sym(id: &str) -> Symbol {
    Symbol::from_qualified_id(id).expect("valid symbol id")
}

/// Build a model from `(package, exports, dependencies)` triples, in order.
pub fn model(packages: &[(&str, &[&str], &[&str])]) -> PackageModel {
    let mut model = PackageModel::new();
    for (name, exports, deps) in packages {
        let pkg = model.package_mut(name);
        for e in *exports {
            pkg.add_export(sym(e)).expect("export belongs to package");
        }
        for d in *deps {
            pkg.add_dependency(sym(d));
        }
    }
    model
}

pub fn ranks(notation: &str) -> RankTable {
    RankTable::parse(notation).expect("valid notation")
}
