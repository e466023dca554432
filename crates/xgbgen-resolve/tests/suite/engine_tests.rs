use xgbgen_resolve::{ResolveError, TypeResolver, WireConfig};
use super::common::{resolved, XPROTO};

#[test]
fn alias_chain_reaches_base_width() {
    let doc = resolved(
        r#"<xcb header="t">
             <typedef oldname="CARD16" newname="T1" />
             <typedef oldname="T1" newname="T2" />
           </xcb>"#,
        &[],
    );
    let config = WireConfig::default();
    let types = TypeResolver::new(&doc, &config);
    assert_eq!(types.size_of("T2").unwrap(), 2);
    assert_eq!(types.type_alias("T2"), Some("T1"));
}

#[test]
fn resources_have_handle_width_at_any_alias_depth() {
    let doc = resolved(
        r#"<xcb header="glx">
             <import>xproto</import>
             <xidtype name="CONTEXT" />
             <typedef oldname="DRAWABLE" newname="GLX_DRAWABLE" />
             <typedef oldname="GLX_DRAWABLE" newname="GLX_WINDOW" />
           </xcb>"#,
        &[("xproto", XPROTO)],
    );
    let config = WireConfig { resource_width: 8, ..WireConfig::default() };
    let types = TypeResolver::new(&doc, &config);

    assert_eq!(types.size_of("CONTEXT").unwrap(), 8);
    assert_eq!(types.size_of("WINDOW").unwrap(), 8);
    assert_eq!(types.size_of("DRAWABLE").unwrap(), 8);
    assert_eq!(types.size_of("GLX_WINDOW").unwrap(), 8);
    assert!(!types.is_resource("GLX_WINDOW"));
}

#[test]
fn imported_aliases_resolve_through_the_root() {
    let doc = resolved(
        r#"<xcb header="sync"><import>xproto</import>
             <typedef oldname="TIMESTAMP" newname="SYNC_TIME" />
           </xcb>"#,
        &[("xproto", XPROTO)],
    );
    let config = WireConfig::default();
    let types = TypeResolver::new(&doc, &config);
    assert_eq!(types.size_of("SYNC_TIME").unwrap(), 4);
    assert_eq!(types.size_of("KEYCODE").unwrap(), 1);
}

#[test]
fn unknown_type_has_no_base_size() {
    let doc = resolved(r#"<xcb header="t"/>"#, &[]);
    let config = WireConfig::default();
    let err = TypeResolver::new(&doc, &config).size_of("MYSTERY").unwrap_err();
    assert_eq!(err.to_string(), "Undefined type `MYSTERY`: no base size for type");
}

#[test]
fn alias_to_nothing_names_the_last_hop() {
    let doc = resolved(
        r#"<xcb header="t"><typedef oldname="GONE" newname="A" /></xcb>"#,
        &[],
    );
    let config = WireConfig::default();
    let err = TypeResolver::new(&doc, &config).size_of("A").unwrap_err();
    assert!(matches!(err, ResolveError::TypeUndefined { ref name, .. } if name == "GONE"));
}

#[test]
fn alias_cycle_is_reported_not_looped() {
    let doc = resolved(
        r#"<xcb header="t">
             <typedef oldname="B" newname="A" />
             <typedef oldname="C" newname="B" />
             <typedef oldname="A" newname="C" />
           </xcb>"#,
        &[],
    );
    let config = WireConfig::default();
    let err = TypeResolver::new(&doc, &config).size_of("A").unwrap_err();
    assert_eq!(err.to_string(), "Cyclic type alias involving `A`: A -> B -> C -> A");
}

#[test]
fn union_lookup_follows_one_alias_hop_only() {
    let doc = resolved(
        r#"<xcb header="t">
             <import>xproto</import>
             <typedef oldname="ClientMessageData" newname="T1" />
             <typedef oldname="T1" newname="T" />
             <typedef oldname="CARD32" newname="T2" />
             <typedef oldname="T2" newname="T3" />
           </xcb>"#,
        &[("xproto", XPROTO)],
    );
    let config = WireConfig::default();
    let types = TypeResolver::new(&doc, &config);

    assert_eq!(types.union_of("ClientMessageData").map(|u| u.name.as_str()), Some("ClientMessageData"));
    assert_eq!(types.union_of("T1").map(|u| u.name.as_str()), Some("ClientMessageData"));
    // Two hops away: not found, although size_of still follows both hops.
    assert!(types.union_of("T").is_none());
    assert!(types.union_of("T3").is_none());
    assert_eq!(types.size_of("T3").unwrap(), 4);
}

#[test]
fn has_type_does_not_look_into_imports() {
    let doc = resolved(
        r#"<xcb header="shape"><import>xproto</import><typedef oldname="CARD8" newname="OP" /></xcb>"#,
        &[("xproto", XPROTO)],
    );
    let config = WireConfig::default();
    let types = TypeResolver::new(&doc, &config);

    assert!(types.has_type("OP"));
    assert!(!types.has_type("WINDOW"));
    assert!(!types.has_type("POINT"));
    assert!(types.is_resource("WINDOW"));
    assert!(types.is_defined("WINDOW"));
    assert!(types.is_defined("POINT"));
    assert!(!types.is_defined("RECTANGLE"));
}

#[test]
fn resource_search_recurses_through_bound_imports_only() {
    let mut doc = resolved(
        r#"<xcb header="composite"><import>render</import></xcb>"#,
        &[("render", r#"<xcb header="render"><import>xproto</import><xidtype name="PICTURE"/></xcb>"#)],
    );
    let config = WireConfig::default();

    {
        let types = TypeResolver::new(&doc, &config);
        assert!(types.is_resource("PICTURE"));
        // render's own import was never loaded.
        assert!(!types.is_resource("WINDOW"));
    }

    let render = doc.imports[0].document.as_deref_mut().unwrap();
    render.imports[0].bind(xgbgen_syntax::parse_document(XPROTO).unwrap());
    let types = TypeResolver::new(&doc, &config);
    assert!(types.is_resource("WINDOW"));
    // type_alias and union_of stay with direct imports.
    assert_eq!(types.type_alias("TIMESTAMP"), None);
    assert!(types.union_of("ClientMessageData").is_none());
}
