use xgbgen_resolve::{assign_enum_values, check_field_types, ResolveError, TypeResolver, WireConfig};
use super::common::{resolved, XPROTO};

#[test]
fn enum_pass_leaves_imports_alone() {
    let mut doc = resolved(
        r#"<xcb header="shape"><import>xproto</import>
             <enum name="SO"><item name="Set"/><item name="Union"/></enum>
           </xcb>"#,
        &[("xproto", XPROTO)],
    );
    assign_enum_values(&mut doc).unwrap();

    let so: Vec<_> = doc.enums[0].items.iter().map(|i| i.value).collect();
    assert_eq!(so, vec![Some(0), Some(1)]);

    let xproto = doc.imports[0].document.as_deref().unwrap();
    assert!(xproto.enums[0].items.iter().all(|i| i.value.is_none()));
    assert!(!xproto.enums.is_empty());
}

#[test]
fn every_field_type_must_be_defined() {
    let doc = resolved(
        r#"<xcb header="shape"><import>xproto</import>
             <typedef oldname="CARD8" newname="KIND" />
             <event name="Notify" number="0">
               <field type="KIND" name="shape_kind" />
               <field type="WINDOW" name="affected_window" />
               <field type="TIMESTAMP" name="server_time" />
               <pad bytes="4" />
             </event>
             <request name="Rectangles" opcode="1">
               <list type="POINT" name="points" />
               <valueparam value-mask-type="CARD32" value-mask-name="mask" value-list-name="values" />
             </request>
           </xcb>"#,
        &[("xproto", XPROTO)],
    );
    let config = WireConfig::default();
    check_field_types(&TypeResolver::new(&doc, &config)).unwrap();
}

#[test]
fn undefined_field_type_fails_generation() {
    let doc = resolved(
        r#"<xcb header="shape">
             <struct name="Box"><field type="RECTANGLE" name="bounds" /></struct>
           </xcb>"#,
        &[],
    );
    let config = WireConfig::default();
    let err = check_field_types(&TypeResolver::new(&doc, &config)).unwrap_err();
    assert!(matches!(err, ResolveError::TypeUndefined { ref name, .. } if name == "RECTANGLE"));
}

#[test]
fn undefined_mask_type_fails_generation() {
    let doc = resolved(
        r#"<xcb header="t">
             <request name="Configure" opcode="12">
               <valueparam value-mask-type="MASK16" value-mask-name="mask" value-list-name="values" />
             </request>
           </xcb>"#,
        &[],
    );
    let config = WireConfig::default();
    let err = check_field_types(&TypeResolver::new(&doc, &config)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Undefined type `MASK16`: used by field `mask` of request `Configure`"
    );
}
