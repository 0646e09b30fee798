//! Double Metaphone phonetic encoding.
//!
//! Lawrence Philips' Double Metaphone algorithm maps a word to a short
//! pronunciation key. Words with an ambiguous pronunciation (Germanic,
//! Slavic, Spanish, Italian spellings, ...) additionally receive an
//! alternate key. The encoding is deterministic and case-insensitive.
//!
//! Key characters: `0` stands for the "th" sound, `X` for "sh"/"ch",
//! `J` for the soft "g"/"j" sound and `A` for any initial vowel.

/// Primary and optional alternate key for one word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneticKeys {
    pub primary: String,
    pub alternate: Option<String>,
}

impl PhoneticKeys {
    /// Iterate over the non-empty keys, primary first.
    ///
    /// An alternate identical to the primary is yielded only once.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let primary = Some(self.primary.as_str()).filter(|key| !key.is_empty());
        let alternate = self
            .alternate
            .as_deref()
            .filter(|key| !key.is_empty() && *key != self.primary);
        primary.into_iter().chain(alternate)
    }

    /// Phonetic equality: any key of `self` equals any key of `other`.
    pub fn sounds_like(&self, other: &PhoneticKeys) -> bool {
        self.keys().any(|mine| other.keys().any(|theirs| mine == theirs))
    }
}

/// Double Metaphone encoder with a configurable maximum key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleMetaphone {
    max_len: usize,
}

impl DoubleMetaphone {
    /// The customary key length.
    pub const DEFAULT_KEY_LENGTH: usize = 4;

    /// Create an encoder producing keys of at most `max_len` characters.
    pub fn new(max_len: usize) -> Self {
        DoubleMetaphone { max_len }
    }

    /// Maximum length of produced keys.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Compute the keys for a word.
    pub fn encode(&self, word: &str) -> PhoneticKeys {
        Encoder::new(word, self.max_len).run()
    }
}

impl Default for DoubleMetaphone {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY_LENGTH)
    }
}

/// Working state for a single encoding run.
///
/// Positions are signed because many rules look behind the cursor
/// (`current - 2`, `current - 4`) near the start of the word.
struct Encoder {
    /// Upper-cased word padded with four spaces.
    word: Vec<char>,
    /// Length of the unpadded word.
    length: isize,
    last: isize,
    max_len: usize,
    slavo_germanic: bool,
    primary: String,
    alternate: String,
    has_alternate: bool,
}

impl Encoder {
    fn new(word: &str, max_len: usize) -> Self {
        let mut chars: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();
        let length = chars.len() as isize;
        chars.extend([' '; 4]);

        let upper: String = chars.iter().collect();
        let slavo_germanic = upper.contains('W')
            || upper.contains('K')
            || upper.contains("CZ")
            || upper.contains("WITZ");

        Encoder {
            word: chars,
            length,
            last: length - 1,
            max_len,
            slavo_germanic,
            primary: String::new(),
            alternate: String::new(),
            has_alternate: false,
        }
    }

    fn run(mut self) -> PhoneticKeys {
        if self.length < 1 {
            return self.finish();
        }

        let mut current: isize = 0;

        // Silent first letter.
        if self.is_at(0, &["GN", "KN", "PN", "WR", "PS"]) {
            current += 1;
        }

        // Initial 'X' is pronounced 'Z', e.g. 'Xavier'.
        if self.char_at(0) == 'X' {
            self.add("S");
            current += 1;
        }

        while self.primary.len() < self.max_len || self.alternate.len() < self.max_len {
            if current >= self.length {
                break;
            }

            current = match self.char_at(current) {
                'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                    if current == 0 {
                        self.add("A");
                    }
                    current + 1
                }
                'B' => {
                    // "-mb" as in "dumb" is handled by 'M'.
                    self.add("P");
                    self.skip_double(current, 'B')
                }
                'Ç' => {
                    self.add("S");
                    current + 1
                }
                'C' => self.encode_c(current),
                'D' => self.encode_d(current),
                'F' => {
                    self.add("F");
                    self.skip_double(current, 'F')
                }
                'G' => self.encode_g(current),
                'H' => {
                    // Kept only when initial or between vowels.
                    if (current == 0 || self.is_vowel(current - 1)) && self.is_vowel(current + 1) {
                        self.add("H");
                        current + 2
                    } else {
                        current + 1
                    }
                }
                'J' => self.encode_j(current),
                'K' => {
                    self.add("K");
                    self.skip_double(current, 'K')
                }
                'L' => self.encode_l(current),
                'M' => {
                    let next = if (self.is_at(current - 1, &["UMB"])
                        && (current + 1 == self.last || self.is_at(current + 2, &["ER"])))
                        || self.char_at(current + 1) == 'M'
                    {
                        current + 2
                    } else {
                        current + 1
                    };
                    self.add("M");
                    next
                }
                'N' => {
                    self.add("N");
                    self.skip_double(current, 'N')
                }
                'Ñ' => {
                    self.add("N");
                    current + 1
                }
                'P' => {
                    if self.char_at(current + 1) == 'H' {
                        self.add("F");
                        current + 2
                    } else {
                        // "campbell", "raspberry"
                        self.add("P");
                        if self.is_at(current + 1, &["P", "B"]) {
                            current + 2
                        } else {
                            current + 1
                        }
                    }
                }
                'Q' => {
                    self.add("K");
                    self.skip_double(current, 'Q')
                }
                'R' => {
                    // French "rogier", but not "hochmeier".
                    if current == self.last
                        && !self.slavo_germanic
                        && self.is_at(current - 2, &["IE"])
                        && !self.is_at(current - 4, &["ME", "MA"])
                    {
                        self.add_alt("", "R");
                    } else {
                        self.add("R");
                    }
                    self.skip_double(current, 'R')
                }
                'S' => self.encode_s(current),
                'T' => self.encode_t(current),
                'V' => {
                    self.add("F");
                    self.skip_double(current, 'V')
                }
                'W' => self.encode_w(current),
                'X' => {
                    // French "breaux"
                    if !(current == self.last
                        && (self.is_at(current - 3, &["IAU", "EAU"])
                            || self.is_at(current - 2, &["AU", "OU"])))
                    {
                        self.add("KS");
                    }
                    if self.is_at(current + 1, &["C", "X"]) {
                        current + 2
                    } else {
                        current + 1
                    }
                }
                'Z' => self.encode_z(current),
                _ => current + 1,
            };
        }

        self.finish()
    }

    fn finish(mut self) -> PhoneticKeys {
        self.primary.truncate(self.max_len);
        self.alternate.truncate(self.max_len);

        PhoneticKeys {
            primary: self.primary,
            alternate: self.has_alternate.then_some(self.alternate),
        }
    }

    fn encode_c(&mut self, current: isize) -> isize {
        // Various Germanic.
        if current > 1
            && !self.is_vowel(current - 2)
            && self.is_at(current - 1, &["ACH"])
            && self.char_at(current + 2) != 'I'
            && (self.char_at(current + 2) != 'E' || self.is_at(current - 2, &["BACHER", "MACHER"]))
        {
            self.add("K");
            return current + 2;
        }

        if current == 0 && self.is_at(current, &["CAESAR"]) {
            self.add("S");
            return current + 2;
        }

        // Italian "chianti"
        if self.is_at(current, &["CHIA"]) {
            self.add("K");
            return current + 2;
        }

        if self.is_at(current, &["CH"]) {
            // "michael"
            if current > 0 && self.is_at(current, &["CHAE"]) {
                self.add_alt("K", "X");
                return current + 2;
            }

            // Greek roots, "chemistry", "chorus".
            if current == 0
                && (self.is_at(current + 1, &["HARAC", "HARIS"])
                    || self.is_at(current + 1, &["HOR", "HYM", "HIA", "HEM"]))
                && !self.is_at(0, &["CHORE"])
            {
                self.add("K");
                return current + 2;
            }

            if self.is_germanic()
                || self.is_at(current - 2, &["ORCHES", "ARCHIT", "ORCHID"])
                || self.is_at(current + 2, &["T", "S"])
                || ((self.is_at(current - 1, &["A", "O", "U", "E"]) || current == 0)
                    && self.is_at(
                        current + 2,
                        &["L", "R", "N", "M", "B", "H", "F", "V", "W", " "],
                    ))
            {
                self.add("K");
            } else if current > 0 {
                if self.is_at(0, &["MC"]) {
                    self.add("K");
                } else {
                    self.add_alt("X", "K");
                }
            } else {
                self.add("X");
            }
            return current + 2;
        }

        // "czerny"
        if self.is_at(current, &["CZ"]) && !self.is_at(current - 2, &["WICZ"]) {
            self.add_alt("S", "X");
            return current + 2;
        }

        // "focaccia"
        if self.is_at(current + 1, &["CIA"]) {
            self.add("X");
            return current + 3;
        }

        // Double 'C', but not "McClellan".
        if self.is_at(current, &["CC"]) && !(current == 1 && self.char_at(0) == 'M') {
            if self.is_at(current + 2, &["I", "E", "H"]) && !self.is_at(current + 2, &["HU"]) {
                // "accident", "accede", "succeed"
                if (current == 1 && self.char_at(current - 1) == 'A')
                    || self.is_at(current - 1, &["UCCEE", "UCCES"])
                {
                    self.add("KS");
                } else {
                    // "bacci", "bertucci"
                    self.add("X");
                }
                return current + 3;
            }
            self.add("K");
            return current + 2;
        }

        if self.is_at(current, &["CK", "CG", "CQ"]) {
            self.add("K");
            return current + 2;
        }

        if self.is_at(current, &["CI", "CE", "CY"]) {
            if self.is_at(current, &["CIO", "CIE", "CIA"]) {
                self.add_alt("S", "X");
            } else {
                self.add("S");
            }
            return current + 2;
        }

        self.add("K");

        // "mac caffrey", "mac gregor"
        if self.is_at(current + 1, &[" C", " Q", " G"]) {
            current + 3
        } else if self.is_at(current + 1, &["C", "K", "Q"])
            && !self.is_at(current + 1, &["CE", "CI"])
        {
            current + 2
        } else {
            current + 1
        }
    }

    fn encode_d(&mut self, current: isize) -> isize {
        if self.is_at(current, &["DG"]) {
            if self.is_at(current + 2, &["I", "E", "Y"]) {
                // "edge"
                self.add("J");
                return current + 3;
            }
            // "edgar"
            self.add("TK");
            return current + 2;
        }

        if self.is_at(current, &["DT", "DD"]) {
            self.add("T");
            return current + 2;
        }

        self.add("T");
        current + 1
    }

    fn encode_g(&mut self, current: isize) -> isize {
        if self.char_at(current + 1) == 'H' {
            if current > 0 && !self.is_vowel(current - 1) {
                self.add("K");
                return current + 2;
            }

            // "ghislane", "ghiradelli"
            if current == 0 {
                if self.char_at(current + 2) == 'I' {
                    self.add("J");
                } else {
                    self.add("K");
                }
                return current + 2;
            }

            // Parker's rule: "hugh", "bough", "broughton".
            if (current > 1 && self.is_at(current - 2, &["B", "H", "D"]))
                || (current > 2 && self.is_at(current - 3, &["B", "H", "D"]))
                || (current > 3 && self.is_at(current - 4, &["B", "H"]))
            {
                return current + 2;
            }

            // "laugh", "cough", "rough", "tough"
            if current > 2
                && self.char_at(current - 1) == 'U'
                && self.is_at(current - 3, &["C", "G", "L", "R", "T"])
            {
                self.add("F");
            } else if current > 0 && self.char_at(current - 1) != 'I' {
                self.add("K");
            }
            return current + 2;
        }

        if self.char_at(current + 1) == 'N' {
            if current == 1 && self.is_vowel(0) && !self.slavo_germanic {
                self.add_alt("KN", "N");
            } else if !self.is_at(current + 2, &["EY"])
                && self.char_at(current + 1) != 'Y'
                && !self.slavo_germanic
            {
                // not "cagney"
                self.add_alt("N", "KN");
            } else {
                self.add("KN");
            }
            return current + 2;
        }

        // "tagliaro"
        if self.is_at(current + 1, &["LI"]) && !self.slavo_germanic {
            self.add_alt("KL", "L");
            return current + 2;
        }

        // -ges-, -gep-, -gel-, -gie- at the beginning.
        if current == 0
            && (self.char_at(current + 1) == 'Y'
                || self.is_at(
                    current + 1,
                    &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
                ))
        {
            self.add_alt("K", "J");
            return current + 2;
        }

        // -ger-, -gy-
        if (self.is_at(current + 1, &["ER"]) || self.char_at(current + 1) == 'Y')
            && !self.is_at(0, &["DANGER", "RANGER", "MANGER"])
            && !self.is_at(current - 1, &["E", "I"])
            && !self.is_at(current - 1, &["RGY", "OGY"])
        {
            self.add_alt("K", "J");
            return current + 2;
        }

        // Italian "biaggi"
        if self.is_at(current + 1, &["E", "I", "Y"]) || self.is_at(current - 1, &["AGGI", "OGGI"]) {
            if self.is_germanic() || self.is_at(current + 1, &["ET"]) {
                self.add("K");
            } else if self.is_at(current + 1, &["IER "]) {
                // French ending
                self.add("J");
            } else {
                self.add_alt("J", "K");
            }
            return current + 2;
        }

        self.add("K");
        self.skip_double(current, 'G')
    }

    fn encode_j(&mut self, current: isize) -> isize {
        // Spanish "jose", "san jacinto"
        if self.is_at(current, &["JOSE"]) || self.is_at(0, &["SAN "]) {
            if (current == 0 && self.char_at(current + 4) == ' ') || self.is_at(0, &["SAN "]) {
                self.add("H");
            } else {
                self.add_alt("J", "H");
            }
            return current + 1;
        }

        if current == 0 {
            // "Yankelovich" / "Jankelowicz"
            self.add_alt("J", "A");
        } else if self.is_vowel(current - 1)
            && !self.slavo_germanic
            && matches!(self.char_at(current + 1), 'A' | 'O')
        {
            // Spanish "bajador"
            self.add_alt("J", "H");
        } else if current == self.last {
            self.add_alt("J", " ");
        } else if !self.is_at(current + 1, &["L", "T", "K", "S", "N", "M", "B", "Z"])
            && !self.is_at(current - 1, &["S", "K", "L"])
        {
            self.add("J");
        }

        self.skip_double(current, 'J')
    }

    fn encode_l(&mut self, current: isize) -> isize {
        if self.char_at(current + 1) == 'L' {
            // Spanish "cabrillo", "gallegos"
            if (current == self.length - 3 && self.is_at(current - 1, &["ILLO", "ILLA", "ALLE"]))
                || ((self.is_at(self.last - 1, &["AS", "OS"]) || self.is_at(self.last, &["A", "O"]))
                    && self.is_at(current - 1, &["ALLE"]))
            {
                self.add_alt("L", " ");
                return current + 2;
            }
            self.add("L");
            return current + 2;
        }

        self.add("L");
        current + 1
    }

    fn encode_s(&mut self, current: isize) -> isize {
        // "island", "isle", "carlisle", "carlysle"
        if self.is_at(current - 1, &["ISL", "YSL"]) {
            return current + 1;
        }

        // "sugar-"
        if current == 0 && self.is_at(current, &["SUGAR"]) {
            self.add_alt("X", "S");
            return current + 1;
        }

        if self.is_at(current, &["SH"]) {
            if self.is_at(current + 1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
                self.add("S");
            } else {
                self.add("X");
            }
            return current + 2;
        }

        // Italian and Armenian.
        if self.is_at(current, &["SIO", "SIA"]) || self.is_at(current, &["SIAN"]) {
            if self.slavo_germanic {
                self.add("S");
            } else {
                self.add_alt("S", "X");
            }
            return current + 3;
        }

        // "smith" / "schmidt", "snider" / "schneider"; also slavic -sz-.
        if (current == 0 && self.is_at(current + 1, &["M", "N", "L", "W"]))
            || self.is_at(current + 1, &["Z"])
        {
            self.add_alt("S", "X");
            return if self.is_at(current + 1, &["Z"]) {
                current + 2
            } else {
                current + 1
            };
        }

        if self.is_at(current, &["SC"]) {
            // Schlesinger's rule.
            if self.char_at(current + 2) == 'H' {
                // Dutch origin, "school", "schooner"
                if self.is_at(current + 3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                    // "schermerhorn", "schenker"
                    if self.is_at(current + 3, &["ER", "EN"]) {
                        self.add_alt("X", "SK");
                    } else {
                        self.add("SK");
                    }
                    return current + 3;
                }
                if current == 0 && !self.is_vowel(3) && self.char_at(3) != 'W' {
                    self.add_alt("X", "S");
                } else {
                    self.add("X");
                }
                return current + 3;
            }

            if self.is_at(current + 2, &["I", "E", "Y"]) {
                self.add("S");
                return current + 3;
            }

            self.add("SK");
            return current + 3;
        }

        // French "resnais", "artois"
        if current == self.last && self.is_at(current - 2, &["AI", "OI"]) {
            self.add_alt("", "S");
        } else {
            self.add("S");
        }

        if self.is_at(current + 1, &["S", "Z"]) {
            current + 2
        } else {
            current + 1
        }
    }

    fn encode_t(&mut self, current: isize) -> isize {
        if self.is_at(current, &["TION"]) {
            self.add("X");
            return current + 3;
        }

        if self.is_at(current, &["TIA", "TCH"]) {
            self.add("X");
            return current + 3;
        }

        if self.is_at(current, &["TH"]) || self.is_at(current, &["TTH"]) {
            // "thomas", "thames", or Germanic
            if self.is_at(current + 2, &["OM", "AM"]) || self.is_germanic() {
                self.add("T");
            } else {
                self.add_alt("0", "T");
            }
            return current + 2;
        }

        self.add("T");
        if self.is_at(current + 1, &["T", "D"]) {
            current + 2
        } else {
            current + 1
        }
    }

    fn encode_w(&mut self, current: isize) -> isize {
        if self.is_at(current, &["WR"]) {
            self.add("R");
            return current + 2;
        }

        if current == 0 && (self.is_vowel(current + 1) || self.is_at(current, &["WH"])) {
            if self.is_vowel(current + 1) {
                // "Wasserman" / "Vasserman"
                self.add_alt("A", "F");
            } else {
                // "Uomo" / "Womo"
                self.add("A");
            }
        }

        // "Arnow" / "Arnoff"
        if (current == self.last && self.is_vowel(current - 1))
            || self.is_at(current - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || self.is_at(0, &["SCH"])
        {
            self.add_alt("", "F");
            return current + 1;
        }

        // Polish "filipowicz"
        if self.is_at(current, &["WICZ", "WITZ"]) {
            self.add_alt("TS", "FX");
            return current + 4;
        }

        current + 1
    }

    fn encode_z(&mut self, current: isize) -> isize {
        // Pinyin "zhao"
        if self.char_at(current + 1) == 'H' {
            self.add("J");
            return current + 2;
        }

        if self.is_at(current + 1, &["ZO", "ZI", "ZA"])
            || (self.slavo_germanic && current > 0 && self.char_at(current - 1) != 'T')
        {
            self.add_alt("S", "TS");
        } else {
            self.add("S");
        }

        self.skip_double(current, 'Z')
    }

    /// "VAN ", "VON " or "SCH" at the start of the word.
    fn is_germanic(&self) -> bool {
        self.is_at(0, &["VAN ", "VON "]) || self.is_at(0, &["SCH"])
    }

    fn skip_double(&self, current: isize, letter: char) -> isize {
        if self.char_at(current + 1) == letter {
            current + 2
        } else {
            current + 1
        }
    }

    fn char_at(&self, pos: isize) -> char {
        if pos < 0 {
            return '\0';
        }
        self.word.get(pos as usize).copied().unwrap_or('\0')
    }

    fn is_vowel(&self, pos: isize) -> bool {
        pos >= 0 && pos < self.length && matches!(self.char_at(pos), 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
    }

    /// Whether any of `patterns` occurs at `start` in the padded word.
    fn is_at(&self, start: isize, patterns: &[&str]) -> bool {
        if start < 0 {
            return false;
        }
        let start = start as usize;

        patterns.iter().any(|pattern| {
            let mut pos = start;
            for expected in pattern.chars() {
                match self.word.get(pos) {
                    Some(&actual) if actual == expected => pos += 1,
                    _ => return false,
                }
            }
            true
        })
    }

    /// Append to both keys.
    fn add(&mut self, key: &str) {
        self.primary.push_str(key);
        self.alternate.push_str(key);
    }

    /// Append distinct fragments to the primary and alternate keys.
    ///
    /// A `" "` alternate marks the word as having an alternate key without
    /// appending anything to it.
    fn add_alt(&mut self, primary: &str, alternate: &str) {
        self.primary.push_str(primary);

        if !alternate.is_empty() {
            self.has_alternate = true;
            if !alternate.starts_with(' ') {
                self.alternate.push_str(alternate);
            }
        } else if !primary.is_empty() && !primary.starts_with(' ') {
            self.alternate.push_str(primary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(word: &str) -> (String, Option<String>) {
        let keys = DoubleMetaphone::default().encode(word);
        (keys.primary, keys.alternate)
    }

    fn primary(word: &str) -> String {
        DoubleMetaphone::default().encode(word).primary
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(keys(""), (String::new(), None));
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(primary("cat"), "KT");
        assert_eq!(primary("kat"), "KT");
        assert_eq!(primary("bat"), "PT");
        assert_eq!(primary("phone"), "FN");
        assert_eq!(primary("fone"), "FN");
        assert_eq!(primary("knight"), "NT");
        assert_eq!(primary("night"), "NT");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(keys("Thompson"), keys("THOMPSON"));
        assert_eq!(keys("smith"), keys("SmItH"));
    }

    #[test]
    fn test_th_has_alternate() {
        assert_eq!(keys("the"), ("0".to_string(), Some("T".to_string())));
        assert_eq!(keys("thee"), ("0".to_string(), Some("T".to_string())));
        // "thomas" takes the hard T only
        assert_eq!(keys("thomas"), ("TMS".to_string(), None));
    }

    #[test]
    fn test_germanic_and_slavic_alternates() {
        assert_eq!(keys("smith"), ("SM0".to_string(), Some("XMT".to_string())));
        assert_eq!(keys("schmidt"), ("XMT".to_string(), Some("SMT".to_string())));
        assert_eq!(keys("filipowicz"), ("FLPT".to_string(), Some("FLPF".to_string())));
    }

    #[test]
    fn test_initial_letter_rules() {
        assert_eq!(primary("xavier"), "SF");
        assert_eq!(primary("wright"), "RT");
        assert_eq!(primary("gnome"), "NM");
        assert_eq!(primary("apple"), "APL");
    }

    #[test]
    fn test_key_length_truncation() {
        let short = DoubleMetaphone::new(2);
        assert_eq!(short.max_len(), 2);
        assert_eq!(short.encode("thompson").primary, "TM");

        let long = DoubleMetaphone::new(8);
        assert_eq!(long.encode("dictionary").primary, "TKXNR");
    }

    #[test]
    fn test_keys_iterator_skips_duplicates_and_empties() {
        let keys = PhoneticKeys {
            primary: "KT".to_string(),
            alternate: Some("KT".to_string()),
        };
        assert_eq!(keys.keys().collect::<Vec<_>>(), vec!["KT"]);

        let keys = PhoneticKeys {
            primary: String::new(),
            alternate: Some("R".to_string()),
        };
        assert_eq!(keys.keys().collect::<Vec<_>>(), vec!["R"]);
    }

    #[test]
    fn test_sounds_like() {
        let encoder = DoubleMetaphone::default();
        assert!(encoder.encode("smith").sounds_like(&encoder.encode("schmidt")));
        assert!(encoder.encode("phone").sounds_like(&encoder.encode("fone")));
        assert!(!encoder.encode("cat").sounds_like(&encoder.encode("dog")));
    }

    #[test]
    fn test_deterministic() {
        let encoder = DoubleMetaphone::default();
        for word in ["michael", "edge", "jose", "caesar", "bacchus", "accident", "zhao"] {
            assert_eq!(encoder.encode(word), encoder.encode(word));
        }
    }
}
