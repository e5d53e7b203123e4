//! Rule-based scheme assistant.
//!
//! The "AI" here is a keyword router over a static reply table, evaluated
//! per request on the server. The client only renders whatever comes back.

use crate::types::ChatReply;
use dioxus::prelude::*;

/// Topics the assistant can answer about, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    Greeting,
    Student,
    Farmer,
    Women,
    Housing,
    Health,
    Employment,
    Deadline,
    Documents,
    HowToApply,
    Eligibility,
    Help,
    Fallback,
}

/// Keyword sets per topic. Hindi and Marathi words are matched directly so
/// users can ask in their own language regardless of the UI language.
const TOPIC_KEYWORDS: &[(ChatTopic, &[&str])] = &[
    (ChatTopic::Greeting, &["hello", "hi", "namaste", "नमस्ते", "नमस्कार"]),
    (
        ChatTopic::Student,
        &["student", "छात्र", "विद्यार्थी", "scholarship", "education"],
    ),
    (ChatTopic::Farmer, &["farmer", "किसान", "शेतकरी", "kisan", "crop"]),
    (ChatTopic::Women, &["women", "woman", "महिला", "girl", "बेटी", "मुलगी"]),
    (ChatTopic::Housing, &["house", "housing", "आवास", "घर", "home"]),
    (
        ChatTopic::Health,
        &["health", "medical", "स्वास्थ्य", "आरोग्य", "hospital", "insurance"],
    ),
    (
        ChatTopic::Employment,
        &["job", "employment", "रोजगार", "नोकरी", "work"],
    ),
    (
        ChatTopic::Deadline,
        &["deadline", "last date", "समय सीमा", "मुदत", "due"],
    ),
    (
        ChatTopic::Documents,
        &["document", "दस्तावेज", "कागदपत्र", "certificate"],
    ),
    (
        ChatTopic::HowToApply,
        &["apply", "how to apply", "आवेदन", "अर्ज", "application"],
    ),
    (
        ChatTopic::Eligibility,
        &["eligible", "पात्र", "पात्रता", "eligibility", "योग्य"],
    ),
    (ChatTopic::Help, &["help", "मदत", "सहायता"]),
];

/// Pick the first topic whose keyword list matches the message.
pub fn route_topic(message: &str) -> ChatTopic {
    let message = message.to_lowercase();
    for (topic, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|k| message.contains(k)) {
            return *topic;
        }
    }
    ChatTopic::Fallback
}

/// Canned reply for a topic in the given language; unknown languages fall
/// back to English.
pub fn reply_text(language: &str, topic: ChatTopic) -> &'static str {
    match (language, topic) {
        ("hi", ChatTopic::Greeting) => "नमस्ते! मैं आपका सरकारी योजना सहायक हूं। आज मैं आपकी कैसे मदद कर सकता हूं?",
        ("hi", ChatTopic::Student) => "छात्रों के लिए, मैं राष्ट्रीय छात्रवृत्ति पोर्टल, PM YASASVI छात्रवृत्ति की सिफारिश करता हूं।",
        ("hi", ChatTopic::Farmer) => "किसानों के लिए प्रमुख योजनाएं: PM Kisan (₹6000/वर्ष), फसल बीमा योजना।",
        ("hi", ChatTopic::Women) => "महिलाओं के लिए: बेटी बचाओ बेटी पढ़ाओ, सुकन्या समृद्धि योजना।",
        ("hi", ChatTopic::Housing) => "आवास के लिए: प्रधानमंत्री आवास योजना।",
        ("hi", ChatTopic::Health) => "स्वास्थ्य के लिए: आयुष्मान भारत ₹5 लाख बीमा।",
        ("hi", ChatTopic::Employment) => "रोजगार के लिए: MGNREGA, मुद्रा योजना।",
        ("hi", ChatTopic::Deadline) => "अधिकांश योजनाओं की समय सीमा मार्च 2025 के आसपास है।",
        ("hi", ChatTopic::Documents) => "आवश्यक दस्तावेज: आधार, बैंक खाता, आय प्रमाण पत्र।",
        ("hi", ChatTopic::HowToApply) => "आवेदन: ऑनलाइन पोर्टल, CSC केंद्र, बैंक शाखा।",
        ("hi", ChatTopic::Eligibility) => "पात्रता: श्रेणी, आयु, आय, लिंग पर निर्भर करती है।",
        ("hi", ChatTopic::Help) => "मैं मदद कर सकता हूं: योजनाएं खोजना, पात्रता जांचना, दस्तावेज।",
        ("hi", ChatTopic::Fallback) => "मैं आपकी श्रेणी के आधार पर सरकारी योजनाएं खोजने में मदद कर सकता हूं।",

        ("mr", ChatTopic::Greeting) => "नमस्कार! मी तुमचा सरकारी योजना सहायक आहे. मी आज तुम्हाला कशी मदत करू शकतो?",
        ("mr", ChatTopic::Student) => "विद्यार्थ्यांसाठी: राष्ट्रीय शिष्यवृत्ती पोर्टल, PM YASASVI शिष्यवृत्ती.",
        ("mr", ChatTopic::Farmer) => "शेतकऱ्यांसाठी: PM किसान (₹6000/वर्ष), पीक विमा योजना.",
        ("mr", ChatTopic::Women) => "महिलांसाठी: मुली वाचवा मुली शिकवा, सुकन्या समृद्धी योजना.",
        ("mr", ChatTopic::Housing) => "घरासाठी: प्रधानमंत्री आवास योजना.",
        ("mr", ChatTopic::Health) => "आरोग्यासाठी: आयुष्मान भारत ₹5 लाख विमा.",
        ("mr", ChatTopic::Employment) => "रोजगारासाठी: MGNREGA, मुद्रा योजना.",
        ("mr", ChatTopic::Deadline) => "बहुत योजनांची मुदत मार्च 2025 पर्यंत असते.",
        ("mr", ChatTopic::Documents) => "आवश्यक कागदपत्रे: आधार, बँक खाते, उत्पन्न प्रमाणपत्र.",
        ("mr", ChatTopic::HowToApply) => "अर्ज: ऑनलाइन पोर्टल, CSC केंद्र, बँक शाखा.",
        ("mr", ChatTopic::Eligibility) => "पात्रता: श्रेणी, वय, उत्पन्न, लिंगावर अवलंबून.",
        ("mr", ChatTopic::Help) => "मी मदत करू शकतो: योजना शोधणे, पात्रता तपासणे, कागदपत्रे.",
        ("mr", ChatTopic::Fallback) => "मी तुमच्या श्रेणीनुसार सरकारी योजना शोधण्यास मदत करू शकतो.",

        (_, ChatTopic::Greeting) => "Namaste! I am your Government Scheme Assistant. How can I help you today?",
        (_, ChatTopic::Student) => "For students, I recommend: National Scholarship Portal, PM YASASVI Scholarship. These provide financial assistance for education. Would you like more details?",
        (_, ChatTopic::Farmer) => "For farmers, key schemes are: PM Kisan Samman Nidhi (₹6000/year), Pradhan Mantri Fasal Bima Yojana (crop insurance). Would you like to apply?",
        (_, ChatTopic::Women) => "For women, schemes include: Beti Bachao Beti Padhao, Sukanya Samriddhi Yojana, Stand Up India for women entrepreneurs. What interests you?",
        (_, ChatTopic::Housing) => "For housing: Pradhan Mantri Awas Yojana provides affordable housing. Rural: up to ₹1.20 lakh, Urban: interest subsidy on home loans.",
        (_, ChatTopic::Health) => "For health: Ayushman Bharat PM-JAY provides ₹5 lakh insurance, Pradhan Mantri Suraksha Bima Yojana for accident cover (₹20/year).",
        (_, ChatTopic::Employment) => "For employment: MGNREGA (100 days guaranteed work), Pradhan Mantri Mudra Yojana (loans up to ₹10 lakh), E-Shram Portal.",
        (_, ChatTopic::Deadline) => "Most government schemes have deadlines around March 2025. It's best to apply early. Would you like to see schemes with nearest deadlines?",
        (_, ChatTopic::Documents) => "Common documents needed: Aadhaar Card, Bank Account, Income Certificate, Category Certificate, Photo. Specific schemes may need additional documents.",
        (_, ChatTopic::HowToApply) => "Most schemes can be applied through: 1) Official government portals, 2) Nearest Common Service Center (CSC), 3) Bank branches. Would you like step-by-step guidance?",
        (_, ChatTopic::Eligibility) => "Eligibility depends on: Category, Age, Income, Gender, Residence. Would you like me to check your eligibility for specific schemes?",
        (_, ChatTopic::Help) => "I can help you with: 1) Finding schemes by category, 2) Checking eligibility, 3) Understanding documents needed, 4) Application process. What would you like to know?",
        (_, ChatTopic::Fallback) => "I can help you find government schemes based on your category. Just tell me: Student, Farmer, Women, Housing, Health, or Employment!",
    }
}

/// Answer one chat message. `category` is the profile category the client
/// sends along; it is accepted for interface stability but routing is purely
/// keyword-based.
#[post("/api/chatbot")]
pub async fn chat(
    message: String,
    language: String,
    category: Option<String>,
) -> Result<ChatReply, ServerFnError> {
    let _ = category;
    #[cfg(feature = "server")]
    tracing::debug!("chatbot.chat: len={} language={}", message.len(), language);

    let topic = route_topic(&message);
    Ok(ChatReply {
        response: reply_text(&language, topic).to_string(),
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_category_keywords() {
        assert_eq!(route_topic("student schemes"), ChatTopic::Student);
        assert_eq!(route_topic("Any CROP insurance?"), ChatTopic::Farmer);
        assert_eq!(route_topic("schemes for महिला"), ChatTopic::Women);
        assert_eq!(route_topic("I need a home loan subsidy"), ChatTopic::Housing);
    }

    #[test]
    fn greeting_wins_over_later_topics() {
        // "hi" appears before any category keyword in priority order.
        assert_eq!(route_topic("hello, farmer schemes please"), ChatTopic::Greeting);
    }

    #[test]
    fn unmatched_message_falls_back() {
        assert_eq!(route_topic("xyzzy"), ChatTopic::Fallback);
        assert_eq!(
            reply_text("en", ChatTopic::Fallback),
            reply_text("fr", ChatTopic::Fallback),
        );
    }

    #[test]
    fn replies_localized_per_language() {
        let en = reply_text("en", ChatTopic::Student);
        let hi = reply_text("hi", ChatTopic::Student);
        let mr = reply_text("mr", ChatTopic::Student);
        assert_ne!(en, hi);
        assert_ne!(hi, mr);
        assert!(hi.contains("छात्रवृत्ति"));
    }

    #[test]
    fn marathi_deadline_question() {
        assert_eq!(route_topic("योजनेची मुदत काय आहे?"), ChatTopic::Deadline);
    }
}
