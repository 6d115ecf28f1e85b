// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for browser front ends.
//!
//! Stateless helpers for the search page (`buildFuzzyQuery`,
//! `paginationGroups`, `searchUrl`, `parseSearchResponse`) and a
//! `ParsWizard` class that drives the PARs upload flow. The wizard hands its
//! steps to a JavaScript callback on completion.

use crate::config::SearchConfig;
use crate::error::ValidationError;
use crate::index_api::{SearchRequest, SearchResponse};
use crate::pagination::pagination_window;
use crate::query::{QueryBuilder, QueryConfig};
use crate::types::{FormRecord, SearchFilters};
use crate::wizard::pars::{validate_par_step, ParFlow, ParStep};
use crate::wizard::script::{apply, WizardAction};
use crate::wizard::{combine_step_data, Navigation, Step, Wizard};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Rejected submission, shaped for inline form errors.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RejectionOutput {
    message: String,
    fields: Vec<String>,
}

impl From<ValidationError> for RejectionOutput {
    fn from(err: ValidationError) -> Self {
        Self {
            fields: err.fields().into_iter().map(String::from).collect(),
            message: err.to_string(),
        }
    }
}

/// Search request passed from JavaScript.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchInput {
    text: String,
    #[serde(default = "first_page")]
    page: usize,
    #[serde(default)]
    filters: SearchFilters,
}

fn first_page() -> usize {
    1
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(js_err)
}

fn rejection(err: ValidationError) -> JsValue {
    to_value(&RejectionOutput::from(err)).unwrap_or_else(js_err)
}

/// Options default when `options` is `undefined` or `null`.
fn query_config(options: JsValue) -> Result<QueryConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(QueryConfig::default());
    }
    from_value(options).map_err(js_err)
}

// ============================================================================
// SEARCH
// ============================================================================

#[wasm_bindgen(js_name = buildFuzzyQuery)]
pub fn build_fuzzy_query(text: &str, options: JsValue) -> Result<String, JsValue> {
    let config = query_config(options)?;
    Ok(QueryBuilder::new(config).build(text))
}

/// `{ firstGroup, middleGroup, lastGroup }` for a result count.
#[wasm_bindgen(js_name = paginationGroups)]
pub fn pagination_groups(
    result_count: usize,
    page_size: usize,
    current_page: usize,
) -> Result<JsValue, JsValue> {
    to_js(&pagination_window(result_count, page_size, current_page))
}

#[wasm_bindgen(js_name = searchUrl)]
pub fn search_url(request: JsValue, config: JsValue) -> Result<String, JsValue> {
    let input: SearchInput = from_value(request).map_err(js_err)?;
    let config: SearchConfig = from_value(config).map_err(js_err)?;
    config.validate().map_err(js_err)?;

    let url = SearchRequest::new(input.text)
        .with_page(input.page)
        .with_filters(input.filters)
        .url(&config)
        .map_err(js_err)?;
    Ok(url.into())
}

#[wasm_bindgen(js_name = parseSearchResponse)]
pub fn parse_search_response(body: &str) -> Result<JsValue, JsValue> {
    let response = SearchResponse::from_json(body).map_err(|e| js_err(e.user_message()))?;
    to_js(&response)
}

// ============================================================================
// WIZARD
// ============================================================================

/// PARs upload wizard.
///
/// Transitions return `{ kind, index }` where `kind` is `moved`, `stayed` or
/// `completed`. Submissions that fail validation, and indices past the last
/// step, throw `{ message, fields }` and leave the wizard unchanged.
#[wasm_bindgen]
pub struct ParsWizard {
    inner: Wizard<'static, ParStep>,
    flow: ParFlow,
}

#[wasm_bindgen]
impl ParsWizard {
    /// `flow` is `"new"` or `"update"`. `onComplete` receives every step.
    #[wasm_bindgen(constructor)]
    pub fn new(flow: &str, on_complete: js_sys::Function) -> Result<ParsWizard, JsValue> {
        let flow: ParFlow = from_value(JsValue::from_str(flow)).map_err(js_err)?;
        let inner = Wizard::from_steps(flow.steps(), move |steps: &[Step<ParStep>]| {
            let result = to_value(steps)
                .map_err(js_err)
                .and_then(|arg| on_complete.call1(&JsValue::NULL, &arg));
            if let Err(e) = result {
                tracing::warn!(error = ?e, "completion callback failed");
            }
        });
        Ok(ParsWizard { inner, flow })
    }

    /// Start over on the same flow.
    pub fn reset(&mut self) {
        self.inner.reset(self.flow.steps());
    }

    /// Current step, or `null` once complete.
    pub fn current(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.current())
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    pub fn steps(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.steps())
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    pub fn submit(&mut self, data: JsValue) -> Result<JsValue, JsValue> {
        let data = self.form(data)?;
        self.run(WizardAction::Submit { data })
    }

    #[wasm_bindgen(js_name = repeatPage)]
    pub fn repeat_page(&mut self, data: JsValue) -> Result<JsValue, JsValue> {
        let data = self.form(data)?;
        self.run(WizardAction::RepeatPage { data })
    }

    #[wasm_bindgen(js_name = goBack)]
    pub fn go_back(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.go_back())
    }

    /// Remove a step and move to the first remaining step of its kind.
    #[wasm_bindgen(js_name = deletePage)]
    pub fn delete_page(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let len = self.inner.steps().len();
        if index >= len {
            return Err(rejection(ValidationError::NoSuchStep { index, len }));
        }
        to_js(&self.inner.delete_page_and_relocate(index))
    }

    #[wasm_bindgen(js_name = goToPage)]
    pub fn go_to_page(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.run(WizardAction::GoToPage { index })
    }

    #[wasm_bindgen(js_name = goToFirstPageOfType)]
    pub fn go_to_first_page_of_type(&mut self, kind: &str) -> Result<JsValue, JsValue> {
        let kind: ParStep = kind.parse().map_err(js_err)?;
        to_js(&self.inner.go_to_first_page_of_type(&kind))
    }

    /// Apply one serialized action, e.g. `{ action: "go_back" }`.
    pub fn dispatch(&mut self, action: JsValue) -> Result<JsValue, JsValue> {
        let action: WizardAction<ParStep> = from_value(action).map_err(js_err)?;
        self.run(action)
    }

    /// Submitted data of every uploaded step, merged.
    pub fn combined(&self) -> Result<JsValue, JsValue> {
        to_js(&combine_step_data(self.inner.steps()))
    }
}

impl ParsWizard {
    fn form(&self, data: JsValue) -> Result<FormRecord, JsValue> {
        from_value(data).map_err(js_err)
    }

    fn run(&mut self, action: WizardAction<ParStep>) -> Result<JsValue, JsValue> {
        let navigation: Navigation =
            apply(&mut self.inner, action, validate_par_step).map_err(rejection)?;
        to_js(&navigation)
    }
}
