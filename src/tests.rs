use super::*;

mod display_options;
mod dom_select_model;
mod html_parsing;

const PROBE_HTML: &str = r#"
    <!DOCTYPE html>
    <form name='query_form'>
      <select id='graph'>
        <option value='yeast'>Yeast PPI</option>
        <option value='human'>Human PPI</option>
      </select>
      <input id='antisink_map' value=''>
      <input id='source_0' value=''>
      <input id='sink_0' value=''>
    </form>
    <form name='display_form'>
      <div id='display_panel'>
        <select id='ranking_attr'></select>
        <select id='selection_criterion'></select>
        <label for='value_cutoff'>Cutoff</label>
        <input id='value_cutoff' value='0.05'>
        <input id='max_nodes' value='40'>
        <input id='neato_seed' value='54321'>
        <select id='value_attr'></select>
        <select id='bins_func'></select>
        <select id='color_map'></select>
        <select id='image_format'>
          <option value='png' selected>PNG</option>
          <option value='svg'>SVG</option>
        </select>
      </div>
      <input type='hidden' id='query_id' value=''>
    </form>
    "#;

const PROBE_STATE_JSON: &str = r#"
{
  "masterSelections": {
    "ranking_attr": {"mOpt": [
      {"text": "Rank by F", "value": "F", "sSel": [], "sProp": []},
      {"text": "Rank by H", "value": "H", "sSel": [], "sProp": []}
    ]},
    "selection_criterion": {"mOpt": [
      {"text": "Participation Ratio", "value": "pratio", "sSel": [], "sProp": [
        {"selector": {"nodeId": "value_cutoff"}, "property": "visibility", "value": "hidden", "style": "1"},
        {"selector": {"nodeId": "display_panel", "attrValue": "value_cutoff", "attrName": "for", "tag": "label"},
         "property": "visibility", "value": "hidden", "style": "1"}
      ]},
      {"text": "Maximum Nodes", "value": "max_nodes", "sSel": [], "sProp": [
        {"selector": {"nodeId": "value_cutoff"}, "property": "visibility", "value": "hidden", "style": "1"},
        {"selector": {"nodeId": "display_panel", "attrValue": "value_cutoff", "attrName": "for", "tag": "label"},
         "property": "visibility", "value": "hidden", "style": "1"}
      ]},
      {"text": "Cutoff Value", "value": "value_cutoff", "sSel": [], "sProp": [
        {"selector": {"nodeId": "value_cutoff"}, "property": "visibility", "value": "visible", "style": "1"},
        {"selector": {"nodeId": "display_panel", "attrValue": "value_cutoff", "attrName": "for", "tag": "label"},
         "property": "visibility", "value": "visible", "style": "1"}
      ]}
    ]},
    "value_attr": {"mOpt": [
      {"text": "Flow", "value": "flow", "sProp": [], "sSel": [
        {"id": "bins_func", "sOpt": [{"text": "Linear", "value": "lin"}, {"text": "Log", "value": "log"}]},
        {"id": "color_map", "sOpt": [{"text": "Jet", "value": "jet"}, {"text": "Gray", "value": "gray"}]}
      ]},
      {"text": "Flux", "value": "flux", "sProp": [], "sSel": [
        {"id": "bins_func", "sOpt": [{"text": "Log", "value": "log"}, {"text": "Sqrt", "value": "sqrt"}]},
        {"id": "color_map", "sOpt": [{"text": "Hot", "value": "hot"}, {"text": "Gray", "value": "gray"}]}
      ]}
    ]}
  },
  "formSettings": {
    "setProp": [
      {"selector": {"nodeId": "max_nodes"}, "property": "value", "value": "25", "style": "0"},
      {"selector": {"nodeId": "neato_seed"}, "property": "value", "value": "777", "style": "0"},
      {"selector": {"nodeId": "value_cutoff"}, "property": "value", "value": "0.1", "style": "0"},
      {"selector": {"nodeId": "query_id"}, "property": "value", "value": "q-42", "style": "0"}
    ],
    "setMaster": [
      {"nodeId": "ranking_attr", "attrValue": "H", "attrName": "value", "tag": "option"},
      {"nodeId": "selection_criterion", "attrValue": "value_cutoff", "attrName": "value", "tag": "option"},
      {"nodeId": "value_attr", "attrValue": "flux", "attrName": "value", "tag": "option"}
    ],
    "setSelect": [
      {"nodeId": "bins_func", "attrValue": "sqrt", "attrName": "value", "tag": "option"},
      {"nodeId": "color_map", "attrValue": "gray", "attrName": "value", "tag": "option"},
      {"nodeId": "image_format", "attrValue": "svg", "attrName": "value", "tag": "option"}
    ]
  }
}
"#;

const PROBE_QUERY_JSON: &str = r#"
{
  "graphs": [
    {"antisinks": "YAL001C YAL002W"},
    {"antisinks": "TP53"}
  ],
  "example": {"graph": 1, "boundary": [["source_0", "BRCA1"], ["sink_0", "MDM2"]]}
}
"#;

fn probe_page() -> Result<ProbePage> {
    ProbePage::from_html(
        PROBE_HTML,
        ClientState::from_json(PROBE_STATE_JSON)?,
        QueryFormData::from_json(PROBE_QUERY_JSON)?,
    )
}

fn label_visibility(page: &ProbePage) -> Option<String> {
    let query = QueryDescriptor::by_attr("display_panel", "for", "value_cutoff").with_tag("label");
    let label = page.dom().resolve(&query).first().copied()?;
    page.dom().style_get(label, "visibility")
}

fn options_of(dom: &Dom, id: &str) -> Vec<(String, String)> {
    dom.by_id(id).map(|node| dom.options(node)).unwrap_or_default()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(text, value)| (text.to_string(), value.to_string()))
        .collect()
}
