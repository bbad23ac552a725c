use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const SUPPORTED_LANGS: [&str; 1] = ["en"];
const FALLBACK_LANG: &str = "en";

fn load_ftl_source(lang: &str) -> &'static str {
    match lang {
        "en" => include_str!("resources/en.ftl"),
        _ => include_str!("resources/en.ftl"),
    }
}

fn parse_lang(lang_code: &str) -> LanguageIdentifier {
    lang_code
        .parse::<LanguageIdentifier>()
        .unwrap_or_default()
}

fn normalize_lang(mut code: String) -> String {
    code.make_ascii_lowercase();
    let sep = code.find(['-', '_']).unwrap_or(code.len());
    let short = &code[..sep];
    if SUPPORTED_LANGS.contains(&short) {
        short.to_string()
    } else {
        FALLBACK_LANG.to_string()
    }
}

fn detect_system_lang() -> String {
    let sys = sys_locale::get_locale().unwrap_or_default();
    normalize_lang(sys)
}

struct LocalizationManager {
    current: String,
    bundles: HashMap<String, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles: HashMap<String, Bundle> = HashMap::new();
        for &code in SUPPORTED_LANGS.iter() {
            let mut bundle: Bundle = FluentBundle::new(vec![parse_lang(code)]);
            // Card texts are compared verbatim ("9 left"), no bidi isolation marks.
            bundle.set_use_isolating(false);
            match FluentResource::try_new(load_ftl_source(code).to_string()) {
                Ok(res) => {
                    if let Err(errs) = bundle.add_resource(res) {
                        log::error!("FTL for {code} has {} conflicting messages", errs.len());
                    }
                }
                Err((_, errs)) => {
                    log::error!("FTL for {code} failed to parse: {} errors", errs.len());
                }
            }
            bundles.insert(code.to_string(), bundle);
        }
        Self {
            current: FALLBACK_LANG.to_string(),
            bundles,
        }
    }

    // normalize_lang only yields codes that have a bundle.
    fn set_current(&mut self, code: &str) {
        self.current = normalize_lang(code.to_string());
    }

    fn format_with_args(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for code in [self.current.as_str(), FALLBACK_LANG] {
            let Some(b) = self.bundles.get(code) else { continue };
            let Some(pat) = b.get_message(id).and_then(|m| m.value()) else {
                continue;
            };
            let mut errors = vec![];
            let s = b.format_pattern(pat, args, &mut errors).to_string();
            if !errors.is_empty() {
                log::warn!("formatting {id} produced {} errors", errors.len());
            }
            return s;
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

/// Pick the UI language. `None` follows the system locale; anything unsupported
/// lands on English.
pub fn initialize_localization(preferred_lang: Option<&str>) {
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        match preferred_lang {
            Some(code) => mgr.set_current(code),
            None => {
                let detected = detect_system_lang();
                mgr.set_current(&detected)
            }
        }
    })
}

pub fn get_current_language() -> String {
    LOCALIZATION.with(|cell| cell.borrow().current.clone())
}

pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_message_has_no_isolation_marks() {
        let s = translate_with("card-stock-left", &[("count", "0".to_string())]);
        assert_eq!(s, "0 left");
    }

    #[test]
    fn unknown_message_is_marked() {
        assert_eq!(translate("nope"), "[missing: nope]");
    }

    #[test]
    fn regional_codes_normalize_to_base_language() {
        initialize_localization(Some("en-IN"));
        assert_eq!(get_current_language(), "en");
        initialize_localization(Some("xx"));
        assert_eq!(get_current_language(), "en");
        assert_eq!(translate("card-add-to-cart"), "Add to cart");
    }
}
