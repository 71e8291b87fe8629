//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! The Google Maps glue in `maps.js` lives under `window.dwlrMaps`; its
//! asynchronous calls return promises that are awaited through
//! `wasm_bindgen_futures::JsFuture`.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static MAPS_JS: &str = include_str!("../assets/js/maps.js");

const D3_URL: &str = "https://d3js.org/d3.v7.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DWLR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate `code` and hand back its value or the thrown error.
pub fn eval_js(code: &str) -> Result<JsValue, JsValue> {
    js_sys::eval(code)
}

/// Await the promise produced by evaluating `code`.
pub async fn eval_promise(code: &str) -> Result<JsValue, JsValue> {
    let value = js_sys::eval(code)?;
    let promise = js_sys::Promise::resolve(&value);
    JsFuture::from(promise).await
}

/// Encode `value` as a JS literal (JSON is valid JS).
pub fn js_arg<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Best-effort message for a thrown JS value.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Add the D3 script tag unless the page already has one.
fn ensure_d3() {
    call_js(&format!(
        r#"
        if (typeof d3 === 'undefined' && !document.getElementById('dwlr-d3')) {{
            var s = document.createElement('script');
            s.id = 'dwlr-d3';
            s.src = {url};
            document.head.appendChild(s);
        }}
        "#,
        url = js_arg(D3_URL),
    ));
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderBarChart(...)` via
/// `function` declarations. They are evaluated at global scope through an
/// indirect `eval()` once D3 is ready and then promoted to `window.*`.
/// Calling this again after the first time is a no-op.
pub fn init_charts() {
    ensure_d3();
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, LINE_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__dwlrChartsInit) {{ window.__dwlrChartsInit = true; window.__dwlrChartScripts = {}; }}",
        js_arg(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (!window.__dwlrChartScripts) return;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__dwlrChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__dwlrChartScripts);
                    delete window.__dwlrChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__dwlrChartsReady = true;
                    console.log('DWLR charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until the charts are initialized and the container exists, then call
/// `window.{function}(id, data, config)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__dwlrChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[DWLR] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a bar chart of `[{label, value, year}]` points.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a line chart; series with a `fill` color are drawn as areas.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Define `window.dwlrMaps`. Safe to call repeatedly.
pub fn init_maps() {
    if let Err(e) = js_sys::eval(MAPS_JS) {
        log::error!("[DWLR] bridge: maps glue failed: {}", describe_js_error(&e));
    }
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Scroll an element to its bottom edge.
pub fn scroll_to_bottom(element_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({id}); if (el) el.scrollTop = el.scrollHeight;",
        id = js_arg(element_id)
    ));
}
