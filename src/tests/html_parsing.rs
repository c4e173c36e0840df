use super::*;

#[test]
fn option_end_tags_are_implied() -> Result<()> {
    let dom = Dom::from_html("<select id='s'><option>Alpha<option value='b'>Beta</select>")?;
    let select = dom.by_id("s").expect("select");
    assert_eq!(dom.options(select), pairs(&[("Alpha", "Alpha"), ("Beta", "b")]));
    Ok(())
}

#[test]
fn comments_declarations_and_scripts_are_not_content() -> Result<()> {
    let dom = Dom::from_html(
        r#"<!DOCTYPE html>
        <!-- <p id='hidden'>nope</p> -->
        <p id='shown'>yes</p>
        <script>if (a < b) { document.write("<p id='fake'>") }</script>
        "#,
    )?;
    assert!(dom.by_id("hidden").is_none());
    assert!(dom.by_id("fake").is_none());
    let shown = dom.by_id("shown").expect("shown");
    assert_eq!(dom.text_content(shown), "yes");
    Ok(())
}

#[test]
fn attribute_forms_and_character_references_decode() -> Result<()> {
    let dom = Dom::from_html(
        r#"<input id=plain value=a&amp;b disabled><label id="q" for='x' title="&lt;&#65;&#x42;&gt; &bogus;">Fish &amp; chips</label>"#,
    )?;
    let plain = dom.by_id("plain").expect("plain");
    assert_eq!(dom.value(plain), "a&b");
    assert!(dom.is_disabled(plain));

    let label = dom.by_id("q").expect("label");
    assert_eq!(dom.attr(label, "for").as_deref(), Some("x"));
    assert_eq!(dom.attr(label, "title").as_deref(), Some("<AB> &bogus;"));
    assert_eq!(dom.text_content(label), "Fish & chips");
    Ok(())
}

#[test]
fn stray_end_tags_are_ignored_and_void_tags_do_not_nest() -> Result<()> {
    let dom = Dom::from_html("<div id='d'></span><input id='i'><b id='b'>x</b></div>")?;
    let div = dom.by_id("d").expect("div");
    let bold = dom.by_id("b").expect("b");
    assert_eq!(dom.parent(bold), Some(div));
    Ok(())
}

#[test]
fn malformed_markup_reports_html_parse_errors() {
    for html in [
        "<p>unterminated <!-- comment",
        "<div id='x",
        "<script>never closed",
        "<div></div",
    ] {
        let result = Dom::from_html(html);
        assert!(matches!(result, Err(Error::HtmlParse(_))), "{html}: {result:?}");
    }
}
