// Built-in wordlists for all supported languages.
//
// Native-script and romanized spellings are listed side by side as separate
// entries. The English lists double as the default censor set, so the filter
// works with no external wordlist at all.

use super::{Category, Language, Lexicon};

const EN_SEVERE: &[&str] = &[
    "fuck", "fucking", "shit", "bitch", "asshole", "bastard", "dickhead", "prick", "cock",
    "pussy", "crap", "damn", "hell", "ass", "dumbass",
];

const EN_DEROGATORY: &[&str] = &[
    "stupid", "idiot", "fool", "dumb", "moron", "retard", "retarded", "imbecile", "jerk",
    "loser", "scum", "trash", "garbage", "worthless", "pathetic",
];

const EN_SYNONYMS: &[(&str, &str)] = &[
    ("fuck", "extremely bad"),
    ("fucking", "very"),
    ("shit", "nonsense"),
    ("bitch", "difficult person"),
    ("asshole", "unpleasant person"),
    ("bastard", "difficult person"),
    ("dickhead", "rude person"),
    ("prick", "annoying person"),
    ("damn", "darn"),
    ("hell", "heck"),
    ("crap", "nonsense"),
    ("ass", "fool"),
    ("dumbass", "misguided person"),
    ("stupid", "unwise"),
    ("idiot", "inexperienced person"),
    ("fool", "naive person"),
    ("dumb", "uninformed"),
    ("moron", "confused person"),
    ("retard", "challenged person"),
    ("retarded", "developmentally different"),
    ("imbecile", "uninformed person"),
    ("jerk", "rude person"),
    ("loser", "unsuccessful person"),
    ("scum", "unpleasant person"),
    ("trash", "undesirable"),
    ("garbage", "poor quality"),
    ("worthless", "unvalued"),
    ("pathetic", "unfortunate"),
];

const HI_SEVERE: &[&str] = &[
    "चूतिया", "chutiya", "मादरचोद", "madarchod", "बहनचोद", "behenchod", "bhenchod",
    "भोसडीके", "bhosadike", "लौडा", "lauda", "लंड", "lund", "गांडू", "gandu", "झाटू", "jhatu",
    "भोसडा", "bhosda", "रांड", "randi", "चुतियापा", "chutiyapa", "बकचोद", "bakchod",
];

const HI_DEROGATORY: &[&str] = &[
    "बेवकूफ़", "बेवकूफ", "bewakoof", "bewakuf", "मूर्ख", "गधा", "gadha", "उल्लू", "ullu",
    "हरामी", "harami", "हरामज़ादा", "haramzada", "कमीना", "kamina", "कमीने", "kamine",
    "कुत्ता", "kutta", "कुत्ते", "kutte", "सुअर", "suar", "बकवास", "bakwas", "गाली", "gaali",
    "गंदा", "ganda", "ब्लडी फूल", "bloody fool",
];

const HI_SYNONYMS: &[(&str, &str)] = &[
    ("चूतिया", "मूर्ख"),
    ("chutiya", "moorkhh"),
    ("मादरचोद", "अत्यंत बुरा"),
    ("madarchod", "atyant bura"),
    ("बहनचोद", "अत्यंत बुरा"),
    ("behenchod", "atyant bura"),
    ("bhenchod", "atyant bura"),
    ("भोसडीके", "बुरा व्यक्ति"),
    ("bhosadike", "bura vyakti"),
    ("रांड", "बुरी महिला"),
    ("randi", "buri mahila"),
    ("चुतियापा", "बेकार काम"),
    ("chutiyapa", "bekaar kaam"),
    ("बकचोद", "बकवास करने वाला"),
    ("bakchod", "bakwas karne wala"),
    ("बेवकूफ़", "अनजान"),
    ("बेवकूफ", "अनजान"),
    ("bewakoof", "anjaan"),
    ("bewakuf", "anjaan"),
    ("मूर्ख", "अज्ञानी"),
    ("गधा", "नासमझ"),
    ("gadha", "nasamajh"),
    ("उल्लू", "भोला"),
    ("ullu", "bhola"),
    ("हरामी", "बुरा व्यक्ति"),
    ("harami", "bura vyakti"),
    ("हरामज़ादा", "अविश्वासी व्यक्ति"),
    ("haramzada", "avishvaasi vyakti"),
    ("कमीना", "बुरा व्यक्ति"),
    ("kamina", "bura vyakti"),
    ("कमीने", "बुरे लोग"),
    ("kamine", "bure log"),
    ("कुत्ता", "नीच व्यक्ति"),
    ("kutta", "neech vyakti"),
    ("कुत्ते", "नीच लोग"),
    ("kutte", "neech log"),
    ("सुअर", "अस्वच्छ व्यक्ति"),
    ("suar", "asvachh vyakti"),
    ("बकवास", "बेकार बात"),
    ("bakwas", "bekaar baat"),
    ("गाली", "अपमानजनक शब्द"),
    ("gaali", "apmaanjanak shabd"),
    ("गंदा", "अशुभ"),
    ("ganda", "ashubh"),
    ("ब्लडी फूल", "मूर्ख"),
    ("bloody fool", "moorkhh"),
];

const TA_SEVERE: &[&str] = &[
    "புண்டா", "punda", "ஓத்தா", "otha", "ஓம்பு", "ombu", "தேவடியா", "thevidiya", "குத்தி",
    "koothi", "பூல்", "pul",
];

const TA_DEROGATORY: &[&str] = &[
    "முட்டாள்", "muttaal", "பைத்தியம்", "paithiyam", "கழுதை", "kazhudhai", "நாய்", "naai",
    "பன்னி", "panni", "பண்ணி", "loosu", "porukki", "kirukku",
];

const TA_SYNONYMS: &[(&str, &str)] = &[
    ("புண்டா", "மோசமானவர்"),
    ("punda", "mosamaanavar"),
    ("ஓத்தா", "மிக மோசம்"),
    ("otha", "miga mosam"),
    ("ஓம்பு", "மிக மோசம்"),
    ("ombu", "miga mosam"),
    ("தேவடியா", "கெட்டவர்"),
    ("thevidiya", "kettavar"),
    ("குத்தி", "கெட்டவர்"),
    ("koothi", "kettavar"),
    ("பூல்", "மோசம்"),
    ("pul", "mosam"),
    ("முட்டாள்", "அறியாதவர்"),
    ("muttaal", "ariyathavar"),
    ("பைத்தியம்", "குழப்பமானவர்"),
    ("paithiyam", "kuzhhappamanavar"),
    ("கழுதை", "மூடனம்றவர்"),
    ("kazhudhai", "mudanamravar"),
    ("நாய்", "தீயவர்"),
    ("naai", "theeyavar"),
    ("பன்னி", "தீயவர்"),
    ("panni", "theeyavar"),
    ("loosu", "theriyadhavar"),
    ("porukki", "kettavar"),
    ("kirukku", "pizhhaiyaanavar"),
];

const TE_SEVERE: &[&str] = &[
    "పూకు", "pooku", "లండ", "land", "బోడు", "bodu", "కూతురు", "kothuru", "పూరి", "poori",
    "lanjakoduku",
];

const TE_DEROGATORY: &[&str] = &[
    "మూర్ఖుడు", "moorkhhudu", "వెధవ", "vedava", "గాడిదేడు", "gadidhedu", "గాడిద", "గోవు",
    "govu", "కుక్క", "kukka", "పంది", "pandi", "ద్రోహి", "drohi", "gadu",
];

const TE_SYNONYMS: &[(&str, &str)] = &[
    ("పూకు", "చెడ్డది"),
    ("pooku", "cheddadi"),
    ("లండ", "చెడ్డది"),
    ("land", "cheddadi"),
    ("బోడు", "చెడ్డ వ్యక్తి"),
    ("bodu", "chedda vyakthi"),
    ("కూతురు", "చెడ్డది"),
    ("kothuru", "cheddadi"),
    ("పూరి", "చెడ్డది"),
    ("poori", "cheddadi"),
    ("lanjakoduku", "chedda vyakthi"),
    ("మూర్ఖుడు", "తెలియని వ్యక్తి"),
    ("moorkhhudu", "teliyani vyakthi"),
    ("వెధవ", "అనుభవం లేని వారు"),
    ("vedava", "anubhavam leni vaaru"),
    ("గాడిదేడు", "మూర్ఖుడు"),
    ("gadidhedu", "moorkhhudu"),
    ("గోవు", "మూఢనంమైన వ్యక్తి"),
    ("govu", "mudanamaina vyakthi"),
    ("కుక్క", "తప్పుడు వ్యక్తి"),
    ("kukka", "thappudu vyakthi"),
    ("పంది", "మూఢనంమైన వ్యక్తి"),
    ("pandi", "mudanamaina vyakthi"),
    ("ద్రోహి", "తప్పు మనసు ఉన్న వ్యక్తి"),
    ("drohi", "thappu manasu unna vyakthi"),
    ("gadu", "chedda vyakthi"),
];

/// Build the built-in lexicon.
pub fn load() -> Lexicon {
    let mut lexicon = Lexicon::empty();
    for language in Language::ALL {
        let (severe, derogatory, synonyms) = lists_for(language);
        lexicon.add_terms(language, Category::Severe, severe);
        lexicon.add_terms(language, Category::Derogatory, derogatory);
        for (term, synonym) in synonyms {
            lexicon.add_synonym(language, term, synonym);
        }
    }
    lexicon
}

type Lists = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [(&'static str, &'static str)],
);

fn lists_for(language: Language) -> Lists {
    match language {
        Language::En => (EN_SEVERE, EN_DEROGATORY, EN_SYNONYMS),
        Language::Hi => (HI_SEVERE, HI_DEROGATORY, HI_SYNONYMS),
        Language::Ta => (TA_SEVERE, TA_DEROGATORY, TA_SYNONYMS),
        Language::Te => (TE_SEVERE, TE_DEROGATORY, TE_SYNONYMS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_terms() {
        let lexicon = load();
        for language in Language::ALL {
            let (severe, derogatory) = lexicon.terms_for(language);
            assert!(!severe.is_empty(), "{language} has no severe terms");
            assert!(!derogatory.is_empty(), "{language} has no derogatory terms");
        }
    }

    #[test]
    fn test_english_synonyms_present() {
        let lexicon = load();
        assert_eq!(lexicon.synonym_for(Language::En, "stupid"), Some("unwise"));
        assert_eq!(lexicon.synonym_for(Language::En, "hell"), Some("heck"));
        assert_eq!(lexicon.synonym_for(Language::En, "cock"), None);
    }

    #[test]
    fn test_native_and_romanized_are_independent() {
        let lexicon = load();
        assert_eq!(lexicon.synonym_for(Language::Hi, "गधा"), Some("नासमझ"));
        assert_eq!(lexicon.synonym_for(Language::Hi, "gadha"), Some("nasamajh"));
        assert_eq!(
            lexicon.category_of(Language::Hi, "गधा"),
            Some(Category::Derogatory)
        );
    }
}
