use roxmltree::{Document, Node};
use swcv_domain::model::{ModelError, PackageModel, Symbol};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog.xml is not well-formed: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("cannot find library information in swc")]
    NoLibraries,

    #[error("no def for script {0:?}")]
    MissingDef(String),

    #[error("no id attribute for <{0}> in script {1:?}")]
    MissingId(&'static str, String),

    #[error("invalid symbol in catalog: {0}")]
    Symbol(#[from] ModelError),
}

/// Parse `catalog.xml` text into a package model.
///
/// Layout: `swc > libraries > library > script`, where each script holds one `def`
/// (the exported symbol) and any number of `dep` elements.
pub fn parse_catalog(text: &str) -> Result<PackageModel, CatalogError> {
    let doc = Document::parse(text)?;

    let root = doc.root_element();
    let libraries: Vec<Node<'_, '_>> = if is_element(root, "swc") {
        child_element(root, "libraries")
            .map(|libs| child_elements(libs, "library").collect())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    if libraries.is_empty() {
        return Err(CatalogError::NoLibraries);
    }

    let mut model = PackageModel::new();
    for library in libraries {
        for script in child_elements(library, "script") {
            read_script(&mut model, script)?;
        }
    }

    Ok(model)
}

fn read_script(model: &mut PackageModel, script: Node<'_, '_>) -> Result<(), CatalogError> {
    if !script.has_children() {
        return Ok(());
    }
    let script_name = script.attribute("name").unwrap_or_default().to_string();

    let def = child_element(script, "def").ok_or_else(|| CatalogError::MissingDef(script_name.clone()))?;
    let def_id = def
        .attribute("id")
        .ok_or_else(|| CatalogError::MissingId("def", script_name.clone()))?;

    let pkg = model.define(Symbol::from_qualified_id(def_id)?);

    for dep in child_elements(script, "dep") {
        let id = dep
            .attribute("id")
            .ok_or_else(|| CatalogError::MissingId("dep", script_name.clone()))?;
        pkg.add_dependency(Symbol::from_qualified_id(id)?);
    }

    Ok(())
}

fn is_element(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| is_element(*c, name))
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |c| is_element(*c, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<swc xmlns="http://www.adobe.com/flash/swccatalog/9">
  <versions>
    <swc version="1.2" />
  </versions>
  <libraries>
    <library path="library.swf">
      <script name="com/acme/util/Strings" mod="1300000000000">
        <def id="com.acme.util:Strings" />
        <dep id="AS3" type="n" />
        <dep id="Object" type="i" />
      </script>
      <script name="com/acme/ui/Button" mod="1300000000000">
        <def id="com.acme.ui:Button" />
        <dep id="com.acme.util:Strings" type="e" />
        <dep id="flash.display:Sprite" type="i" />
        <dep id="com.acme.util:Strings" type="s" />
      </script>
      <script name="com/acme/util/Numbers" mod="1300000000000">
        <def id="com.acme.util:Numbers" />
      </script>
      <script name="empty" />
      <digests />
    </library>
  </libraries>
</swc>
"#;

    #[test]
    fn parses_packages_exports_and_dependencies() {
        let model = parse_catalog(CATALOG).expect("parse catalog");

        let names: Vec<&str> = model.packages().map(|p| p.name()).collect();
        assert_eq!(names, vec!["com.acme.util", "com.acme.ui"]);

        let util = model.package("com.acme.util").expect("util");
        let exports: Vec<String> = util.exports().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            exports,
            vec!["com.acme.util:Numbers", "com.acme.util:Strings"]
        );
        let deps: Vec<String> = util.dependencies().iter().map(|s| s.to_string()).collect();
        assert_eq!(deps, vec!["default:AS3", "default:Object"]);

        let ui = model.package("com.acme.ui").expect("ui");
        let deps: Vec<String> = ui.dependencies().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            deps,
            vec![
                "com.acme.util:Strings",
                "flash.display:Sprite",
                "com.acme.util:Strings"
            ]
        );
    }

    #[test]
    fn missing_libraries_is_an_error() {
        let err = parse_catalog(r#"<swc><libraries/></swc>"#).unwrap_err();
        assert!(matches!(err, CatalogError::NoLibraries));

        let err = parse_catalog(r#"<other><libraries><library/></libraries></other>"#).unwrap_err();
        assert!(matches!(err, CatalogError::NoLibraries));
    }

    #[test]
    fn script_without_def_is_an_error() {
        let text = r#"<swc><libraries><library>
            <script name="a/B"><dep id="x:Y"/></script>
        </library></libraries></swc>"#;
        let err = parse_catalog(text).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDef(ref name) if name == "a/B"));
    }

    #[test]
    fn def_and_dep_need_ids() {
        let text = r#"<swc><libraries><library>
            <script name="a/B"><def/></script>
        </library></libraries></swc>"#;
        assert!(matches!(
            parse_catalog(text).unwrap_err(),
            CatalogError::MissingId("def", _)
        ));

        let text = r#"<swc><libraries><library>
            <script name="a/B"><def id="a:B"/><dep type="i"/></script>
        </library></libraries></swc>"#;
        assert!(matches!(
            parse_catalog(text).unwrap_err(),
            CatalogError::MissingId("dep", _)
        ));
    }

    #[test]
    fn malformed_symbol_id_is_an_error() {
        let text = r#"<swc><libraries><library>
            <script name="a/B"><def id="a:B:C"/></script>
        </library></libraries></swc>"#;
        assert!(matches!(
            parse_catalog(text).unwrap_err(),
            CatalogError::Symbol(ModelError::MalformedId(_))
        ));
    }

    #[test]
    fn invalid_xml_is_an_error() {
        assert!(matches!(
            parse_catalog("<swc><libraries>").unwrap_err(),
            CatalogError::Xml(_)
        ));
    }

    #[test]
    fn multiple_libraries_merge_into_one_model() {
        let text = r#"<swc><libraries>
            <library><script><def id="a:A"/></script></library>
            <library><script><def id="b:B"/><dep id="a:A"/></script></library>
        </libraries></swc>"#;
        let model = parse_catalog(text).expect("parse");
        assert_eq!(model.len(), 2);
        assert_eq!(model.package("b").expect("b").dependencies().len(), 1);
    }
}
