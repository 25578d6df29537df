//! deep-assert-value-random — deterministic random value generator.
//!
//! Produces acyclic [`Value`] graphs spanning every category the equality
//! engine classifies: primitives, plain objects, arrays (with occasional
//! holes), sets, maps, dates, regular expressions, errors, boxed primitives,
//! typed arrays and array buffers. Generation is seeded and fully
//! deterministic, so failing cases can be replayed from their seed.
//!
//! Float typed-array lanes are always finite: a `NaN` lane would make an
//! array loosely unequal to its own structural copy (element-wise `===`
//! semantics), which is noise in equality sweeps.

use deep_assert_value::{ErrorKind, ObjectHandle, SymbolValue, TypedArrayData, Value};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

const WORDS: &[&str] = &["", "a", "b", "key", "value", "nested", "0", "1", "1.5", "0x10"];
const PATTERNS: &[(&str, &str)] = &[("a", ""), ("ab+c", "i"), ("^x$", "m"), ("[0-9]+", "g")];

/// Options for [`RandomValue`].
#[derive(Debug, Clone)]
pub struct RandomValueOptions {
    /// Maximum nesting depth of container values.
    pub max_depth: usize,
    /// Maximum element count per container.
    pub max_width: usize,
    /// Whether symbols may appear (as values and property keys).
    pub symbols: bool,
}

impl Default for RandomValueOptions {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_width: 4,
            symbols: true,
        }
    }
}

/// Seeded random value generator.
pub struct RandomValue {
    rng: Xoshiro256PlusPlus,
    options: RandomValueOptions,
}

impl RandomValue {
    pub fn new(seed: u64) -> Self {
        Self::with_options(seed, RandomValueOptions::default())
    }

    pub fn with_options(seed: u64, options: RandomValueOptions) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            options,
        }
    }

    /// Generates one value.
    pub fn generate(&mut self) -> Value {
        let depth = self.options.max_depth;
        self.value(depth)
    }

    fn value(&mut self, depth: usize) -> Value {
        if depth == 0 {
            return self.primitive();
        }
        match self.rng.gen_range(0u32..10) {
            0..=3 => self.primitive(),
            4 => self.object(depth - 1),
            5 => self.array(depth - 1),
            6 => self.set(depth - 1),
            7 => self.map(depth - 1),
            _ => self.leaf_object(),
        }
    }

    fn primitive(&mut self) -> Value {
        match self.rng.gen_range(0u32..8) {
            0 => Value::Undefined,
            1 => Value::Null,
            2 => Value::Bool(self.rng.gen_bool(0.5)),
            3 | 4 => Value::Number(self.number()),
            5 => Value::bigint(self.rng.gen_range(-1000i128..1000)),
            6 if self.options.symbols => Value::symbol(Some(self.word())),
            _ => Value::string(self.word()),
        }
    }

    fn number(&mut self) -> f64 {
        match self.rng.gen_range(0u32..8) {
            0 => 0.0,
            1 => -0.0,
            2 => f64::NAN,
            3 => f64::INFINITY,
            4 => self.rng.gen_range(-1000i64..1000) as f64,
            _ => self.rng.gen_range(-1000.0f64..1000.0),
        }
    }

    fn word(&mut self) -> &'static str {
        WORDS[self.rng.gen_range(0..WORDS.len())]
    }

    fn width(&mut self) -> usize {
        self.rng.gen_range(0..=self.options.max_width)
    }

    fn object(&mut self, depth: usize) -> Value {
        let handle = ObjectHandle::ordinary();
        for index in 0..self.width() {
            let item = self.value(depth);
            handle.set(format!("k{index}"), item);
        }
        if self.options.symbols && self.rng.gen_bool(0.2) {
            let item = self.value(depth);
            handle.set(SymbolValue::new(Some("meta")), item);
        }
        Value::Object(handle)
    }

    fn array(&mut self, depth: usize) -> Value {
        let mut elements = Vec::new();
        for _ in 0..self.width() {
            if self.rng.gen_bool(0.1) {
                elements.push(None);
            } else {
                elements.push(Some(self.value(depth)));
            }
        }
        Value::array_sparse(elements)
    }

    fn set(&mut self, depth: usize) -> Value {
        let width = self.width();
        Value::set_from((0..width).map(|_| self.value(depth)))
    }

    fn map(&mut self, depth: usize) -> Value {
        let width = self.width();
        Value::map_from((0..width).map(|_| {
            let key = self.value(depth);
            let item = self.value(depth);
            (key, item)
        }))
    }

    fn leaf_object(&mut self) -> Value {
        match self.rng.gen_range(0u32..8) {
            0 => {
                let timestamp = if self.rng.gen_bool(0.1) {
                    f64::NAN
                } else {
                    self.rng.gen_range(0i64..2_000_000_000_000) as f64
                };
                Value::date(timestamp)
            }
            1 => {
                let (source, flags) = PATTERNS[self.rng.gen_range(0..PATTERNS.len())];
                Value::regexp(source, flags).expect("pattern pool is valid")
            }
            2 => Value::error(ErrorKind::TypeError, self.word()),
            3 => match self.rng.gen_range(0u32..4) {
                0 => Value::boxed_number(self.number()),
                1 => Value::boxed_string(self.word()),
                2 => Value::boxed_bool(self.rng.gen_bool(0.5)),
                _ => Value::boxed_bigint(self.rng.gen_range(-100i128..100)),
            },
            4 => {
                let bytes: Vec<u8> = (0..self.width()).map(|_| self.rng.gen()).collect();
                Value::array_buffer(bytes)
            }
            _ => Value::typed_array(self.typed_array()),
        }
    }

    fn typed_array(&mut self) -> TypedArrayData {
        let width = self.width();
        match self.rng.gen_range(0u32..6) {
            0 => TypedArrayData::from_u8(&self.byte_lanes(width)),
            1 => TypedArrayData::from_i8(
                &(0..width).map(|_| self.rng.gen()).collect::<Vec<i8>>(),
            ),
            2 => TypedArrayData::from_i16(
                &(0..width).map(|_| self.rng.gen()).collect::<Vec<i16>>(),
            ),
            3 => TypedArrayData::from_u32(
                &(0..width).map(|_| self.rng.gen()).collect::<Vec<u32>>(),
            ),
            4 => TypedArrayData::from_f32(
                &(0..width)
                    .map(|_| self.rng.gen_range(-100.0f32..100.0))
                    .collect::<Vec<_>>(),
            ),
            _ => TypedArrayData::from_f64(
                &(0..width)
                    .map(|_| self.rng.gen_range(-100.0f64..100.0))
                    .collect::<Vec<_>>(),
            ),
        }
    }

    fn byte_lanes(&mut self, width: usize) -> Vec<u8> {
        (0..width).map(|_| self.rng.gen()).collect()
    }
}
