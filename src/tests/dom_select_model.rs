use super::*;

#[test]
fn single_select_defaults_to_first_enabled_option() -> Result<()> {
    let dom = Dom::from_html(
        r#"
        <select id='plain'><option>One</option><option>Two</option></select>
        <select id='gated'><option disabled>Locked</option><option value='open'>Open</option></select>
        <select id='multi' multiple><option>A</option><option>B</option></select>
        <select id='empty'></select>
        "#,
    )?;

    let plain = dom.by_id("plain").expect("plain");
    assert_eq!(dom.selected_index(plain), Some(0));
    assert_eq!(dom.value(plain), "One");

    let gated = dom.by_id("gated").expect("gated");
    assert_eq!(dom.value(gated), "open");

    let multi = dom.by_id("multi").expect("multi");
    assert_eq!(dom.selected_index(multi), None);
    assert_eq!(dom.value(multi), "");

    let empty = dom.by_id("empty").expect("empty");
    assert_eq!(dom.selected_index(empty), None);
    assert_eq!(dom.value(empty), "");
    Ok(())
}

#[test]
fn last_selected_attribute_wins_in_single_select() -> Result<()> {
    let dom = Dom::from_html(
        "<select id='s'><option selected>A</option><option selected>B</option><option>C</option></select>",
    )?;
    let select = dom.by_id("s").expect("select");
    assert_eq!(dom.selected_index(select), Some(1));
    Ok(())
}

#[test]
fn options_inside_optgroups_count_for_index_and_value() -> Result<()> {
    let dom = Dom::from_html(
        r#"
        <select id='s'>
          <optgroup label='first'><option value='a'>A</option></optgroup>
          <optgroup label='second'><option value='b' selected>B</option></optgroup>
        </select>
        "#,
    )?;
    let select = dom.by_id("s").expect("select");
    assert_eq!(dom.selected_index(select), Some(1));
    assert_eq!(dom.options(select), pairs(&[("A", "a"), ("B", "b")]));
    Ok(())
}

#[test]
fn set_value_selects_match_or_clears_selection() -> Result<()> {
    let mut dom = Dom::from_html(
        "<select id='s'><option value='x'>X</option><option value='y'>Y</option></select>",
    )?;
    let select = dom.by_id("s").expect("select");

    dom.set_value(select, "y")?;
    assert_eq!(dom.selected_index(select), Some(1));

    dom.set_value(select, "nope")?;
    assert_eq!(dom.selected_index(select), None);
    assert_eq!(dom.value(select), "");
    Ok(())
}

#[test]
fn selection_in_multiple_select_accumulates() -> Result<()> {
    let mut dom = Dom::from_html(
        "<select id='s' multiple><option value='x'>X</option><option value='y'>Y</option></select>",
    )?;
    dom.set_selection(&QueryDescriptor::option_with_value("s", "y"));
    dom.set_selection(&QueryDescriptor::option_with_value("s", "x"));

    let select = dom.by_id("s").expect("select");
    assert_eq!(dom.selected_index(select), Some(0));
    let options = dom.select_options(select);
    assert!(options.iter().all(|option| dom.element(*option).is_some_and(|e| e.selected)));
    Ok(())
}

#[test]
fn form_reset_restores_markup_defaults() -> Result<()> {
    let mut dom = Dom::from_html(
        r#"
        <form id='f'>
          <input id='text' value='default'>
          <input id='flag' type='checkbox' checked>
          <textarea id='notes'>hello</textarea>
          <select id='s'><option value='a'>A</option><option value='b' selected>B</option></select>
        </form>
        <input id='outside' value='kept'>
        "#,
    )?;
    let text = dom.by_id("text").expect("text");
    let flag = dom.by_id("flag").expect("flag");
    let notes = dom.by_id("notes").expect("notes");
    let select = dom.by_id("s").expect("select");
    let outside = dom.by_id("outside").expect("outside");

    dom.set_value(text, "typed")?;
    dom.set_checked(flag, false)?;
    dom.set_value(notes, "edited")?;
    dom.set_value(select, "a")?;
    dom.set_value(outside, "changed")?;

    let form = dom.find_form("f").expect("form");
    dom.reset_form(form)?;

    assert_eq!(dom.value(text), "default");
    assert!(dom.is_checked(flag));
    assert_eq!(dom.value(notes), "hello");
    assert_eq!(dom.value(select), "b");
    assert_eq!(dom.value(outside), "changed");
    Ok(())
}

#[test]
fn find_form_falls_back_to_name() -> Result<()> {
    let dom = Dom::from_html("<div id='query_form'></div><form name='query_form'></form>")?;
    let form = dom.find_form("query_form").expect("named form");
    assert_eq!(dom.tag_name(form), Some("form"));
    assert!(dom.find_form("missing").is_none());
    Ok(())
}

#[test]
fn style_declarations_are_set_replaced_and_removed() -> Result<()> {
    let mut dom = Dom::from_html("<div id='d' style='color: red; margin: 0'></div>")?;
    let div = dom.by_id("d").expect("div");

    dom.style_set(div, "backgroundColor", "blue")?;
    dom.style_set(div, "color", "green")?;
    assert_eq!(
        dom.attr(div, "style").as_deref(),
        Some("color: green; margin: 0; background-color: blue;")
    );
    assert_eq!(dom.style_get(div, "backgroundColor").as_deref(), Some("blue"));

    dom.style_set(div, "margin", "")?;
    assert_eq!(dom.style_get(div, "margin"), None);
    assert_eq!(dom.style_get(div, "display"), None);
    Ok(())
}

#[test]
fn removed_children_lose_their_ids() -> Result<()> {
    let mut dom = Dom::from_html("<div id='outer'><span id='inner'></span></div>")?;
    let outer = dom.by_id("outer").expect("outer");
    dom.remove_children(outer)?;
    assert!(dom.by_id("inner").is_none());
    assert_eq!(dom.dump_node(outer), "<div id=\"outer\"></div>");
    Ok(())
}
