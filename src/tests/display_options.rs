use super::*;

#[test]
fn display_reset_reapplies_form_settings_over_cascade_defaults() -> Result<()> {
    let mut page = probe_page()?;
    page.setup()?;

    // Wander away from the configured state first.
    page.choose_option("selection_criterion", 1)?;
    page.choose_option("image_format", 0)?;
    let max_nodes = page.dom().by_id("max_nodes").expect("max_nodes");
    page.dom_mut().set_value(max_nodes, "3")?;

    page.reset_display()?;

    page.assert_selected_index("ranking_attr", Some(1))?;
    page.assert_value("ranking_attr", "H")?;
    page.assert_value("selection_criterion", "value_cutoff")?;
    page.assert_style("value_cutoff", "visibility", "visible")?;
    assert_eq!(label_visibility(&page).as_deref(), Some("visible"));

    page.assert_value("value_attr", "flux")?;
    page.assert_options("bins_func", &[("Log", "log"), ("Sqrt", "sqrt")])?;
    page.assert_value("bins_func", "sqrt")?;
    page.assert_options("color_map", &[("Hot", "hot"), ("Gray", "gray")])?;
    page.assert_value("color_map", "gray")?;
    page.assert_value("image_format", "svg")?;

    page.assert_value("max_nodes", "25")?;
    page.assert_value("neato_seed", "777")?;
    page.assert_value("value_cutoff", "0.1")?;
    page.assert_value("query_id", "q-42")?;
    Ok(())
}

#[test]
fn display_reset_is_repeatable() -> Result<()> {
    let mut page = probe_page()?;
    page.setup()?;
    page.reset_display()?;
    let first = page.dom().dump_node(page.dom().root());
    let first_values = ["bins_func", "color_map", "value_attr", "image_format"]
        .map(|id| page.value(id));

    page.choose_option("value_attr", 0)?;
    page.reset_display()?;

    assert_eq!(page.dom().dump_node(page.dom().root()), first);
    assert_eq!(
        ["bins_func", "color_map", "value_attr", "image_format"].map(|id| page.value(id)),
        first_values
    );
    Ok(())
}

#[test]
fn empty_form_settings_leave_synchronized_defaults() -> Result<()> {
    let state =
        ClientState::from_json(PROBE_STATE_JSON)?.with_form_settings(FormSettings::default());
    let mut page = ProbePage::from_html(PROBE_HTML, state, QueryFormData::default())?;
    page.setup()?;
    page.choose_option("value_attr", 1)?;

    page.reset_display()?;

    page.assert_selected_index("value_attr", Some(0))?;
    page.assert_options("bins_func", &[("Linear", "lin"), ("Log", "log")])?;
    page.assert_style("value_cutoff", "visibility", "hidden")?;
    page.assert_value("max_nodes", "40")?;
    page.assert_value("image_format", "png")?;
    Ok(())
}

#[test]
fn settings_update_runs_without_a_page_wrapper() -> Result<()> {
    let state = ClientState::from_json(PROBE_STATE_JSON)?;
    let mut dom = Dom::from_html(PROBE_HTML)?;

    Cascade::new(&state, &mut dom).update_display_options()?;

    let ranking = dom.by_id("ranking_attr").expect("ranking_attr");
    assert_eq!(dom.value(ranking), "H");
    let query_id = dom.by_id("query_id").expect("query_id");
    assert_eq!(dom.value(query_id), "q-42");
    Ok(())
}
