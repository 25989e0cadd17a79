//! The Forge: a seeded source of constrained forgeries.

use crate::config::GenerationConfig;
use crate::error::ForgeError;
use crate::factory::{ErasedFactory, ForgeConfigurator, ForgeryFactory, TypedFactory};
use crate::generators::{self, NumberSpec, DEFAULT_INT_STANDARD_DEVIATION};
use forge_core::{Case, ForgeType, ForgedValue, RandomStream, StringFlavor, TypeKey};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Exclusive upper bound of [`Forge::a_tiny_int`].
pub const TINY_THRESHOLD: i32 = 0x20;
/// Exclusive upper bound of [`Forge::a_small_int`].
pub const SMALL_THRESHOLD: i32 = 0x100;
/// Inclusive lower bound of [`Forge::a_big_int`].
pub const BIG_THRESHOLD: i32 = 0x10000;
/// Inclusive lower bound of [`Forge::a_huge_int`].
pub const HUGE_THRESHOLD: i32 = 0x1000000;

/// Seeded generator of test data.
///
/// Every operation draws from a single [`RandomStream`], so two Forges with the
/// same seed that receive the same sequence of calls produce the same values.
/// The call order is part of that contract: interleaving an extra call shifts
/// every later value.
///
/// A Forge is meant to be owned by a single test; it is `Send` but offers no
/// interior synchronisation.
pub struct Forge {
    stream: RandomStream,
    factories: HashMap<TypeKey, Arc<dyn ErasedFactory>>,
    config: GenerationConfig,
}

impl Default for Forge {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Forge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forge")
            .field("seed", &self.stream.seed())
            .field("factories", &self.factories.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Forge {
    /// Create a Forge seeded from system entropy.
    ///
    /// The chosen seed is available through [`Forge::seed`] so a failing run
    /// can be replayed with [`Forge::with_seed`].
    pub fn new() -> Self {
        Self::from_stream(RandomStream::from_entropy(), GenerationConfig::default())
    }

    /// Create a Forge with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_stream(RandomStream::new(seed), GenerationConfig::default())
    }

    /// Create a Forge from explicit settings.
    pub fn from_config(seed: Option<u64>, config: GenerationConfig) -> Result<Self, ForgeError> {
        config.validate()?;
        let stream = match seed {
            Some(seed) => RandomStream::new(seed),
            None => RandomStream::from_entropy(),
        };
        Ok(Self::from_stream(stream, config))
    }

    fn from_stream(stream: RandomStream, config: GenerationConfig) -> Self {
        Self {
            stream,
            factories: HashMap::new(),
            config,
        }
    }

    /// The seed the stream was last initialized with.
    pub fn seed(&self) -> u64 {
        self.stream.seed()
    }

    /// Reseed the Forge and return the effective seed.
    ///
    /// With `None` a fresh seed is taken from system entropy. Registered
    /// factories are kept; only the random state is reset.
    pub fn reset_seed(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(rand::random);
        self.stream.set_seed(seed);
        tracing::debug!(seed = %format!("{seed:#x}"), "Forge seed reset");
        seed
    }

    /// Generation settings in use.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The underlying stream, for factories that draw raw randomness.
    pub fn stream_mut(&mut self) -> &mut RandomStream {
        &mut self.stream
    }

    /// Resolve an optional container or string size to a concrete one.
    pub fn resolve_size(&mut self, size: Option<usize>) -> usize {
        match size {
            Some(size) => size,
            None => self.stream.range_i64(
                self.config.default_size_min as i64,
                self.config.default_size_max as i64,
            ) as usize,
        }
    }

    /// Register the factory forging instances of `T`, replacing any previous one.
    ///
    /// Built-in scalar types (`bool`, `i32`, `i64`, `f32`, `f64`, `char`,
    /// `String`) are always forged by the Forge itself.
    pub fn register_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Any + fmt::Debug + PartialEq,
        F: ForgeryFactory<T> + 'static,
    {
        let key = TypeKey::of::<T>();
        let replaced = self
            .factories
            .insert(key, Arc::new(TypedFactory::<T, F>::new(factory)))
            .is_some();
        tracing::debug!(type_name = key.name(), replaced, "Registered forgery factory");
        self
    }

    /// Whether a factory is registered for `T`.
    pub fn has_factory<T: Any>(&self) -> bool {
        self.factories.contains_key(&TypeKey::of::<T>())
    }

    /// Let a configurator register its factories.
    pub fn apply<C: ForgeConfigurator + ?Sized>(&mut self, configurator: &C) -> &mut Self {
        configurator.configure(self);
        self
    }

    /// Forge a value of the given scalar type with default constraints.
    pub fn forge_scalar(&mut self, ty: &ForgeType) -> Result<ForgedValue, ForgeError> {
        match ty {
            ForgeType::Bool => Ok(ForgedValue::Bool(self.a_bool(0.5))),
            ForgeType::Int32 => Ok(ForgedValue::Int(self.forge_int(NumberSpec::default())?)),
            ForgeType::Int64 => Ok(ForgedValue::Long(self.forge_long(NumberSpec::default())?)),
            ForgeType::Float32 => Ok(ForgedValue::Float(self.forge_float(NumberSpec::default())?)),
            ForgeType::Float64 => Ok(ForgedValue::Double(
                self.forge_double(NumberSpec::default())?,
            )),
            ForgeType::Char => Ok(ForgedValue::Char(self.a_char())),
            ForgeType::Text => Ok(ForgedValue::String(self.a_string(None))),
            ForgeType::Custom(key) => self.forge_custom(*key),
        }
    }

    fn forge_custom(&mut self, key: TypeKey) -> Result<ForgedValue, ForgeError> {
        let Some(factory) = self.factories.get(&key).cloned() else {
            tracing::debug!(type_name = key.name(), "No factory registered");
            return Err(ForgeError::NoFactory(key));
        };
        factory.forge_value(self)
    }

    /// Forge an instance of `T`, built-in or produced by its factory.
    pub fn forgery<T: Any>(&mut self) -> Result<T, ForgeError> {
        let value = self.forge_scalar(&ForgeType::of::<T>())?;
        Ok(value.into_scalar::<T>()?)
    }

    /// A boolean which is `true` with the given probability.
    pub fn a_bool(&mut self, probability: f64) -> bool {
        self.stream.bool(probability)
    }

    /// An i32 satisfying `spec`.
    pub fn forge_int(&mut self, spec: NumberSpec<i32>) -> Result<i32, ForgeError> {
        generators::generate_int(&mut self.stream, spec)
    }

    /// An i64 satisfying `spec`.
    pub fn forge_long(&mut self, spec: NumberSpec<i64>) -> Result<i64, ForgeError> {
        generators::generate_long(&mut self.stream, spec)
    }

    /// An f32 satisfying `spec`.
    pub fn forge_float(&mut self, spec: NumberSpec<f32>) -> Result<f32, ForgeError> {
        generators::generate_float(&mut self.stream, spec)
    }

    /// An f64 satisfying `spec`.
    pub fn forge_double(&mut self, spec: NumberSpec<f64>) -> Result<f64, ForgeError> {
        generators::generate_double(&mut self.stream, spec)
    }

    /// An i32 in `[min, max)`.
    pub fn an_int(&mut self, min: i32, max: i32) -> Result<i32, ForgeError> {
        self.forge_int(NumberSpec::range(min, max))
    }

    /// A positive i32; `strict` excludes 0.
    pub fn a_positive_int(&mut self, strict: bool) -> i32 {
        let min = if strict { 1 } else { 0 };
        self.stream.range_i64(min, i64::from(i32::MAX)) as i32
    }

    /// A negative i32; `strict` excludes 0.
    pub fn a_negative_int(&mut self, strict: bool) -> i32 {
        let max = if strict { -1 } else { 0 };
        self.stream.range_i64(i64::from(i32::MIN), max) as i32
    }

    /// An i32 in `[1, TINY_THRESHOLD)`.
    pub fn a_tiny_int(&mut self) -> i32 {
        self.stream.range_i64(1, i64::from(TINY_THRESHOLD)) as i32
    }

    /// An i32 in `[1, SMALL_THRESHOLD)`.
    pub fn a_small_int(&mut self) -> i32 {
        self.stream.range_i64(1, i64::from(SMALL_THRESHOLD)) as i32
    }

    /// An i32 in `[BIG_THRESHOLD, i32::MAX)`.
    pub fn a_big_int(&mut self) -> i32 {
        self.stream
            .range_i64(i64::from(BIG_THRESHOLD), i64::from(i32::MAX)) as i32
    }

    /// An i32 in `[HUGE_THRESHOLD, i32::MAX)`.
    pub fn a_huge_int(&mut self) -> i32 {
        self.stream
            .range_i64(i64::from(HUGE_THRESHOLD), i64::from(i32::MAX)) as i32
    }

    /// An i32 drawn from a normal distribution.
    pub fn a_gaussian_int(&mut self, mean: i32, standard_deviation: i32) -> Result<i32, ForgeError> {
        self.forge_int(NumberSpec::gaussian(mean, standard_deviation))
    }

    /// An i32 around 0 with the default standard deviation.
    pub fn a_default_gaussian_int(&mut self) -> Result<i32, ForgeError> {
        self.a_gaussian_int(0, DEFAULT_INT_STANDARD_DEVIATION)
    }

    /// An i64 in `[min, max)`.
    pub fn a_long(&mut self, min: i64, max: i64) -> Result<i64, ForgeError> {
        self.forge_long(NumberSpec::range(min, max))
    }

    /// A positive i64; `strict` excludes 0.
    pub fn a_positive_long(&mut self, strict: bool) -> i64 {
        let min = if strict { 1 } else { 0 };
        self.stream.range_i64(min, i64::MAX)
    }

    /// An i64 drawn from a normal distribution.
    pub fn a_gaussian_long(
        &mut self,
        mean: i64,
        standard_deviation: i64,
    ) -> Result<i64, ForgeError> {
        self.forge_long(NumberSpec::gaussian(mean, standard_deviation))
    }

    /// An f32 in `[min, max]`.
    pub fn a_float(&mut self, min: f32, max: f32) -> Result<f32, ForgeError> {
        self.forge_float(NumberSpec::range(min, max))
    }

    /// An f32 drawn from a normal distribution.
    pub fn a_gaussian_float(
        &mut self,
        mean: f32,
        standard_deviation: f32,
    ) -> Result<f32, ForgeError> {
        self.forge_float(NumberSpec::gaussian(mean, standard_deviation))
    }

    /// An f64 in `[min, max]`.
    pub fn a_double(&mut self, min: f64, max: f64) -> Result<f64, ForgeError> {
        self.forge_double(NumberSpec::range(min, max))
    }

    /// An f64 drawn from a normal distribution.
    pub fn a_gaussian_double(
        &mut self,
        mean: f64,
        standard_deviation: f64,
    ) -> Result<f64, ForgeError> {
        self.forge_double(NumberSpec::gaussian(mean, standard_deviation))
    }

    /// A printable character below `U+D000`.
    pub fn a_char(&mut self) -> char {
        generators::default_char_class()
            .pick(&mut self.stream)
            .unwrap_or(' ')
    }

    /// A character of the given flavor.
    pub fn a_flavored_char(&mut self, flavor: StringFlavor, case: Case) -> char {
        generators::flavor_class(flavor, case)
            .pick(&mut self.stream)
            .unwrap_or(' ')
    }

    /// A string of printable characters below `U+D000`.
    pub fn a_string(&mut self, size: Option<usize>) -> String {
        let size = self.resolve_size(size);
        generators::generate_from_class(&mut self.stream, &generators::default_char_class(), size)
    }

    /// A string of the given flavor; exactly `size` characters when given.
    pub fn forge_string(&mut self, flavor: StringFlavor, case: Case, size: Option<usize>) -> String {
        let size = self.resolve_size(size);
        generators::generate_string(&mut self.stream, flavor, case, size)
    }

    /// A string matched in full by `pattern`.
    pub fn forge_string_matching(&mut self, pattern: &str) -> Result<String, ForgeError> {
        let compiled = forge_pattern::compile_cached(pattern)?;
        let value = compiled.generate(&mut self.stream);
        tracing::trace!(pattern, value = value.as_str(), "Forged string from pattern");
        Ok(value)
    }

    /// The same string with the case of each letter picked at random.
    pub fn randomize_case(&mut self, input: &str) -> String {
        generators::string::randomize_case(&mut self.stream, input)
    }

    /// A contiguous run of `input`'s characters.
    ///
    /// Without a size, the length is drawn in `[0, len)`. A size at least as
    /// long as the input returns the whole input.
    pub fn a_substring_of(&mut self, input: &str, size: Option<usize>) -> String {
        let chars: Vec<char> = input.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let size = match size {
            Some(size) => size,
            None => self.stream.range_i64(0, chars.len() as i64) as usize,
        };
        if size >= chars.len() {
            return input.to_string();
        }
        if size == 0 {
            return String::new();
        }
        let start = self.stream.range_i64(0, (chars.len() - size + 1) as i64) as usize;
        chars[start..start + size].iter().collect()
    }

    /// An element picked uniformly, or `None` for an empty slice.
    pub fn an_element_from<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.stream.index(items.len()))
    }

    /// Shuffle the slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        let len = items.len();
        for i in 0..len.saturating_sub(1) {
            let j = self.stream.range_i64(i as i64, len as i64) as usize;
            items.swap(i, j);
        }
    }

    /// Elements picked from `items` without repetition, keeping their order.
    ///
    /// Without a size, the length is drawn in `[0, len)`.
    pub fn a_sublist_of<T: Clone>(&mut self, items: &[T], size: Option<usize>) -> Vec<T> {
        let size = match size {
            Some(size) => size,
            None if items.is_empty() => 0,
            None => self.stream.range_i64(0, items.len() as i64) as usize,
        };
        if size >= items.len() {
            return items.to_vec();
        }

        let mut result = Vec::with_capacity(size);
        let mut to_select = size;
        for (i, item) in items.iter().enumerate() {
            if to_select == 0 {
                break;
            }
            let remaining = items.len() - i;
            if self.stream.uniform_double() < to_select as f64 / remaining as f64 {
                result.push(item.clone());
                to_select -= 1;
            }
        }
        result
    }

    /// A list of `size` elements (default size when `None`).
    pub fn forge_list<T, F>(&mut self, size: Option<usize>, element: F) -> Result<Vec<T>, ForgeError>
    where
        F: FnMut(&mut Forge) -> Result<T, ForgeError>,
    {
        generators::generate_list(self, size, element)
    }

    /// Any collection built from `size` elements forged like a list.
    pub fn forge_collection<C, T, F>(
        &mut self,
        size: Option<usize>,
        element: F,
    ) -> Result<C, ForgeError>
    where
        C: FromIterator<T>,
        F: FnMut(&mut Forge) -> Result<T, ForgeError>,
    {
        Ok(generators::generate_list(self, size, element)?
            .into_iter()
            .collect())
    }

    /// A set of `size` distinct elements.
    pub fn forge_set<T, F>(
        &mut self,
        size: Option<usize>,
        element: F,
    ) -> Result<HashSet<T>, ForgeError>
    where
        T: Eq + Hash,
        F: FnMut(&mut Forge) -> Result<T, ForgeError>,
    {
        generators::generate_set(self, size, element)
    }

    /// `size` distinct elements in generation order, compared with `PartialEq`.
    pub fn forge_distinct<T, F>(
        &mut self,
        size: Option<usize>,
        element: F,
    ) -> Result<Vec<T>, ForgeError>
    where
        T: PartialEq,
        F: FnMut(&mut Forge) -> Result<T, ForgeError>,
    {
        generators::generate_distinct(self, size, element)
    }

    /// A map of `size` entries; each key is forged before its value.
    pub fn forge_map<K, V, FK, FV>(
        &mut self,
        size: Option<usize>,
        key: FK,
        value: FV,
    ) -> Result<HashMap<K, V>, ForgeError>
    where
        K: Eq + Hash,
        FK: FnMut(&mut Forge) -> Result<K, ForgeError>,
        FV: FnMut(&mut Forge) -> Result<V, ForgeError>,
    {
        generators::generate_map(self, size, key, value)
    }

    /// `size` entries with distinct keys, in generation order.
    pub fn forge_entries<K, V, FK, FV>(
        &mut self,
        size: Option<usize>,
        key: FK,
        value: FV,
    ) -> Result<Vec<(K, V)>, ForgeError>
    where
        K: PartialEq,
        FK: FnMut(&mut Forge) -> Result<K, ForgeError>,
        FV: FnMut(&mut Forge) -> Result<V, ForgeError>,
    {
        generators::generate_entries(self, size, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        id: i64,
        name: String,
    }

    fn account_factory(forge: &mut Forge) -> Result<Account, ForgeError> {
        Ok(Account {
            id: forge.a_positive_long(true),
            name: forge.forge_string(StringFlavor::Alphabetical, Case::Lower, Some(8)),
        })
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut a = Forge::with_seed(0x5686_B780_5E0);
        let mut b = Forge::with_seed(0x5686_B780_5E0);

        for _ in 0..50 {
            assert_eq!(a.an_int(13, 42).unwrap(), b.an_int(13, 42).unwrap());
            assert_eq!(
                a.forge_string(StringFlavor::Ascii, Case::Any, None),
                b.forge_string(StringFlavor::Ascii, Case::Any, None)
            );
            assert_eq!(a.a_double(0.0, 1.0).unwrap(), b.a_double(0.0, 1.0).unwrap());
        }
    }

    #[test]
    fn test_reset_seed_replays() {
        let mut forge = Forge::new();
        let seed = forge.seed();
        let first: Vec<i64> = (0..10).map(|_| forge.a_long(0, 1_000_000).unwrap()).collect();

        assert_eq!(forge.reset_seed(Some(seed)), seed);
        let again: Vec<i64> = (0..10).map(|_| forge.a_long(0, 1_000_000).unwrap()).collect();
        assert_eq!(first, again);

        let fresh = forge.reset_seed(None);
        assert_eq!(forge.seed(), fresh);
    }

    #[test]
    fn test_builtin_forgeries() {
        let mut forge = Forge::with_seed(42);
        let _: bool = forge.forgery().unwrap();
        let _: i32 = forge.forgery().unwrap();
        let _: i64 = forge.forgery().unwrap();
        assert!(forge.forgery::<f32>().unwrap().is_finite());
        assert!(forge.forgery::<f64>().unwrap().is_finite());
        let c: char = forge.forgery().unwrap();
        assert!(c >= ' ');
        let s: String = forge.forgery().unwrap();
        assert!((1..32).contains(&s.chars().count()));
    }

    #[test]
    fn test_registered_factory() {
        let mut forge = Forge::with_seed(42);
        assert!(!forge.has_factory::<Account>());
        forge.register_factory::<Account, _>(account_factory);
        assert!(forge.has_factory::<Account>());

        let account: Account = forge.forgery().unwrap();
        assert!(account.id > 0);
        assert_eq!(account.name.len(), 8);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut forge = Forge::with_seed(42);
        forge.register_factory::<Account, _>(account_factory);
        forge.register_factory::<Account, _>(|_: &mut Forge| -> Result<Account, ForgeError> {
            Ok(Account {
                id: 7,
                name: "fixed".to_string(),
            })
        });
        let account: Account = forge.forgery().unwrap();
        assert_eq!(account.id, 7);
    }

    #[test]
    fn test_missing_factory() {
        let mut forge = Forge::with_seed(42);
        let err = forge.forgery::<Account>().unwrap_err();
        assert_eq!(err, ForgeError::NoFactory(TypeKey::of::<Account>()));
    }

    #[test]
    fn test_factories_compose() {
        #[derive(Debug, PartialEq)]
        struct Team {
            members: Vec<Account>,
        }

        let mut forge = Forge::with_seed(42);
        forge.register_factory::<Account, _>(account_factory);
        forge.register_factory::<Team, _>(|forge: &mut Forge| -> Result<Team, ForgeError> {
            Ok(Team {
                members: forge.forge_list(Some(3), |f| f.forgery::<Account>())?,
            })
        });

        let team: Team = forge.forgery().unwrap();
        assert_eq!(team.members.len(), 3);
    }

    #[test]
    fn test_apply_configurator_closure() {
        let mut forge = Forge::with_seed(42);
        forge.apply(&|forge: &mut Forge| {
            forge.register_factory::<Account, _>(account_factory);
        });
        assert!(forge.has_factory::<Account>());
    }

    #[test]
    fn test_from_config_validates() {
        let config = GenerationConfig {
            default_size_min: 5,
            default_size_max: 6,
        };
        let mut forge = Forge::from_config(Some(1), config).unwrap();
        assert_eq!(forge.a_string(None).chars().count(), 5);

        let invalid = GenerationConfig {
            default_size_min: 6,
            default_size_max: 6,
        };
        assert!(Forge::from_config(Some(1), invalid).is_err());
    }

    #[test]
    fn test_default_gaussian_int_replays_explicit_call() {
        let mut a = Forge::with_seed(42);
        let mut b = Forge::with_seed(42);
        for _ in 0..100 {
            assert_eq!(
                a.a_default_gaussian_int().unwrap(),
                b.a_gaussian_int(0, DEFAULT_INT_STANDARD_DEVIATION).unwrap()
            );
        }
    }

    #[test]
    fn test_forge_string_exact_size() {
        let mut forge = Forge::with_seed(42);
        let value = forge.forge_string(StringFlavor::Numerical, Case::Any, Some(42));
        assert_eq!(value.len(), 42);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_forge_string_matching() {
        let mut forge = Forge::with_seed(42);
        let value = forge.forge_string_matching(r"[a-z]+@[a-z]+\.[a-z]{3}").unwrap();
        assert!(value.contains('@'));

        let err = forge.forge_string_matching("(?=x)").unwrap_err();
        assert!(matches!(err, ForgeError::Pattern(_)));
    }

    #[test]
    fn test_element_helpers() {
        let mut forge = Forge::with_seed(42);
        let items = [1, 2, 3, 4, 5];
        for _ in 0..50 {
            assert!(items.contains(forge.an_element_from(&items).unwrap()));
        }
        assert_eq!(forge.an_element_from::<i32>(&[]), None);

        let mut shuffled = items;
        forge.shuffle(&mut shuffled);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);

        let sub = forge.a_sublist_of(&items, Some(3));
        assert_eq!(sub.len(), 3);
        assert!(sub.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_substring() {
        let mut forge = Forge::with_seed(42);
        let input = "abcdefghij";
        for _ in 0..50 {
            let sub = forge.a_substring_of(input, Some(4));
            assert_eq!(sub.len(), 4);
            assert!(input.contains(&sub));
        }
        assert_eq!(forge.a_substring_of(input, Some(20)), input);
        assert_eq!(forge.a_substring_of("", None), "");
    }

    #[test]
    fn test_number_helpers() {
        let mut forge = Forge::with_seed(42);
        for _ in 0..200 {
            assert!((1..TINY_THRESHOLD).contains(&forge.a_tiny_int()));
            assert!((1..SMALL_THRESHOLD).contains(&forge.a_small_int()));
            assert!(forge.a_big_int() >= BIG_THRESHOLD);
            assert!(forge.a_huge_int() >= HUGE_THRESHOLD);
            assert!(forge.a_positive_int(true) > 0);
            assert!(forge.a_negative_int(true) < 0);
            assert!(forge.a_negative_int(false) <= 0);
        }
        assert!(forge.an_int(42, 13).is_err());
    }

    #[test]
    fn test_collection_into_any_container() {
        let mut forge = Forge::with_seed(42);
        let deque: std::collections::VecDeque<i32> =
            forge.forge_collection(Some(4), |f| f.an_int(0, 10)).unwrap();
        assert_eq!(deque.len(), 4);
    }
}
