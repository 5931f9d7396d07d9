//! Default remote word-list locations
//!
//! Order matters: when two sources contain the same token, the earlier one is
//! recorded as its provenance.

/// Plaintext Portuguese word lists, in precedence order
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/fserb/pt-br/master/lexico",
    "https://raw.githubusercontent.com/pythonprobr/palavras/master/palavras.txt",
    "https://raw.githubusercontent.com/fserb/pt-br/master/conjugações",
    "https://raw.githubusercontent.com/fserb/pt-br/master/listas/estados-br",
    "https://raw.githubusercontent.com/fserb/pt-br/master/listas/municipios-br",
    "https://raw.githubusercontent.com/fserb/pt-br/master/listas/paises",
    "https://raw.githubusercontent.com/fserb/pt-br/master/listas/verbos",
    "https://raw.githubusercontent.com/dogasantos/ptbr-wordlist/master/wordlist.ptbr.lowercase-acentuado.txt",
    "https://raw.githubusercontent.com/dogasantos/ptbr-wordlist/master/wordlist.ptbr.lowercase-naoacentuado.txt",
];

/// Plaintext list of offensive or otherwise unwanted words
pub const DEFAULT_DENYLIST_SOURCE: &str =
    "https://raw.githubusercontent.com/fserb/pt-br/master/listas/negativas";

/// Host of the dictionary site used to confirm words
pub const DEFAULT_LOOKUP_HOST: &str = "www.dicio.com.br";
