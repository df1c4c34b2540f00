use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::error::CommonError;
use crate::error::Result;
use crate::MESSAGES_FILE;

pub const PLACEHOLDER_NUM_REQ: &str = "NUMREQ";
pub const PLACEHOLDER_WORD: &str = "WORD";

/// User-facing message templates of one locale, as stored in `<dir>/<locale>/user.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    pub endpoint_invalid_msg: String,
    pub get_req_invalid_msg: String,
    pub get_word_not_found_msg: String,
    pub post_req_invalid_msg: String,
    pub post_word_exists_msg: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            endpoint_invalid_msg: "Invalid endpoint.".to_string(),
            get_req_invalid_msg: "Invalid GET request: the 'word' query parameter is required."
                .to_string(),
            get_word_not_found_msg: "Request# %NUMREQ, word '%WORD' not found!".to_string(),
            post_req_invalid_msg:
                "Invalid POST request: both 'word' and 'definition' are required.".to_string(),
            post_word_exists_msg: "Warning! '%WORD' already exists.".to_string(),
        }
    }
}

impl Messages {
    pub fn load(dir: impl AsRef<Path>, locale: &str) -> Result<Self> {
        let path = dir.as_ref().join(locale).join(MESSAGES_FILE);
        let data = fs::read_to_string(&path).map_err(|err| CommonError::MessagesFile(path, err))?;

        Ok(serde_json::from_str(&data)?)
    }

    pub fn word_not_found(&self, num_req: u64, word: &str) -> String {
        let num_req = num_req.to_string();
        render(&self.get_word_not_found_msg, &[
            (PLACEHOLDER_NUM_REQ, num_req.as_str()),
            (PLACEHOLDER_WORD, word),
        ])
    }

    pub fn word_exists(&self, word: &str) -> String {
        render(&self.post_word_exists_msg, &[(PLACEHOLDER_WORD, word)])
    }
}

/// Substitutes every `%NAME` placeholder found in `vars`. Unknown placeholders are kept verbatim.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    lazy_static! {
        static ref PLACEHOLDER_RX: Regex = Regex::new(r"%([A-Z]+)").unwrap();
    }

    PLACEHOLDER_RX
        .replace_all(template, |caps: &Captures| {
            match vars.iter().find(|(name, _)| *name == &caps[1]) {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
