use console_error_panic_hook::set_once;
use wasm_bindgen::{prelude::wasm_bindgen, JsError, JsValue};

use crate::{range::range_from_js, Produced, RangeIterator};

#[wasm_bindgen(inline_js = "export function iterable(range) {
    range[Symbol.iterator] = function () { return this; };
    return range;
}")]
extern "C" {
    /// Make a `Range` usable with `for...of` and spread by handing back itself as its iterator.
    fn iterable(range: JsValue) -> JsValue;
}

/// Every `Range` that crosses into JavaScript goes through here so it stays iterable.
fn to_js(iter: RangeIterator) -> JsValue {
    iterable(JsRange(iter).into())
}

/// The `{ value, done }` pair handed back to JavaScript from `next()`.
#[wasm_bindgen]
pub struct IteratorResult {
    value: f64,
    done: bool,
}

#[wasm_bindgen]
impl IteratorResult {
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[wasm_bindgen(getter)]
    pub fn done(&self) -> bool {
        self.done
    }
}

impl From<Produced> for IteratorResult {
    fn from(produced: Produced) -> Self {
        match produced {
            Produced::Value(value) => Self {
                value: value as f64,
                done: false,
            },
            Produced::Done(count) => Self {
                value: count as f64,
                done: true,
            },
        }
    }
}

#[wasm_bindgen(js_name = Range)]
pub struct JsRange(RangeIterator);

#[wasm_bindgen(js_class = Range)]
impl JsRange {
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> IteratorResult {
        self.0.produce().into()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> f64 {
        self.0.len() as f64
    }

    #[wasm_bindgen(js_name = clone)]
    pub fn clone_range(&self) -> JsValue {
        to_js(self.0.clone())
    }

    pub fn rev(&self) -> JsValue {
        to_js(self.0.clone().rev())
    }

    pub fn step(&self, step: f64) -> JsValue {
        to_js(self.0.step(step as i64))
    }

    pub fn empty(&self) -> bool {
        self.0.empty()
    }

    pub fn contains(&self, item: f64) -> bool {
        item.fract() == 0.0 && self.0.contains(item as i64)
    }
}

/// JavaScript numbers are floats; see `range_from_js` for how they map onto integer bounds.
#[wasm_bindgen]
pub fn range(
    start: Option<f64>,
    end: Option<f64>,
    inclusive: Option<bool>,
) -> Result<JsValue, JsError> {
    // Set the panic hook for better error messages in the browser console
    set_once();

    range_from_js(start, end, inclusive.unwrap_or(false))
        .map(to_js)
        .map_err(|e| JsError::new(&e.to_string()))
}
