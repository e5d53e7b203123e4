//! Sample scheme catalog for local development and tests.
//!
//! Each text field is an `[en, hi, mr]` triple; the English value lands in
//! the base column and the other two in the `_hi`/`_mr` columns.

use crate::types::{Gender, IncomeRange, SchemeCategory};
use sqlx::{Pool, Sqlite};

struct SeedScheme {
    name: [&'static str; 3],
    category: SchemeCategory,
    description: [&'static str; 3],
    benefits: [&'static str; 3],
    eligibility: [&'static str; 3],
    documents: [&'static str; 3],
    how_to_apply: [&'static str; 3],
    official_link: &'static str,
    deadline: &'static str,
    min_age: i64,
    max_age: i64,
    gender: Gender,
    income_range: IncomeRange,
}

pub async fn seed_schemes(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    for scheme in CATALOG {
        sqlx::query(
            r#"
            INSERT INTO schemes (
                name, name_hi, name_mr, category,
                description, description_hi, description_mr,
                benefits, benefits_hi, benefits_mr,
                eligibility, eligibility_hi, eligibility_mr,
                documents, documents_hi, documents_mr,
                how_to_apply, how_to_apply_hi, how_to_apply_mr,
                official_link, deadline, min_age, max_age, gender, income_range
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(scheme.name[0])
        .bind(scheme.name[1])
        .bind(scheme.name[2])
        .bind(scheme.category.as_db())
        .bind(scheme.description[0])
        .bind(scheme.description[1])
        .bind(scheme.description[2])
        .bind(scheme.benefits[0])
        .bind(scheme.benefits[1])
        .bind(scheme.benefits[2])
        .bind(scheme.eligibility[0])
        .bind(scheme.eligibility[1])
        .bind(scheme.eligibility[2])
        .bind(scheme.documents[0])
        .bind(scheme.documents[1])
        .bind(scheme.documents[2])
        .bind(scheme.how_to_apply[0])
        .bind(scheme.how_to_apply[1])
        .bind(scheme.how_to_apply[2])
        .bind(scheme.official_link)
        .bind(scheme.deadline)
        .bind(scheme.min_age)
        .bind(scheme.max_age)
        .bind(scheme.gender.as_db())
        .bind(scheme.income_range.as_db())
        .execute(pool)
        .await?;
    }
    Ok(())
}

const CATALOG: &[SeedScheme] = &[
    SeedScheme {
        name: [
            "PM Kisan Samman Nidhi",
            "प्रधानमंत्री किसान सम्मान निधि",
            "पीएम किसान सामन निधी",
        ],
        category: SchemeCategory::Farmer,
        description: [
            "Direct income support to farmer families",
            "किसान परिवारों को प्रत्यक्ष आय सहायता",
            "शेतकरी कुटुंबाला प्रत्यक्ष उत्पन्न मदत",
        ],
        benefits: [
            "₹6000 per year direct to bank account",
            "बैंक खाते में सालाना ₹6000",
            "वर्षातून ₹6000 थेट बँक खात्यात",
        ],
        eligibility: [
            "Must be a farmer with land ownership",
            "भूमि स्वामित्व वाला किसान होना चाहिए",
            "जमिनीचा मालक असलेला शेतकरी असणे आवश्यक",
        ],
        documents: [
            "Aadhaar Card, Land Records, Bank Account",
            "आधार कार्ड, भूमि रिकॉर्ड, बैंक खाता",
            "आधार कार्ड, जमीन रेकॉर्ड्स, बँक खाते",
        ],
        how_to_apply: [
            "1. Visit nearest CSC\n2. Register with Aadhaar\n3. Submit land records\n4. Get confirmation",
            "1. निकटतम CSC जाएं\n2. आधार से पंजीकरण करें\n3. भूमि रिकॉर्ड जमा करें\n4. पुष्टि प्राप्त करें",
            "1. जवळच्या CSC ला भेट द्या\n2. आधारसह नोंदणी करा\n3. जमीन रेकॉर्ड सबमिट करा\n4. पुष्टी मिळवा",
        ],
        official_link: "https://pmkisan.gov.in",
        deadline: "2024-12-31",
        min_age: 18,
        max_age: 80,
        gender: Gender::All,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "Pradhan Mantri Fasal Bima Yojana",
            "प्रधानमंत्री फसल बीमा योजना",
            "प्रधानमंत्री पीक विमा योजना",
        ],
        category: SchemeCategory::Farmer,
        description: [
            "Crop insurance scheme for farmers",
            "किसानों के लिए फसल बीमा योजना",
            "शेतकऱ्यांसाठी पीक विमा योजना",
        ],
        benefits: [
            "Low premium crop insurance coverage",
            "कम प्रीमियम फसल बीमा कवरेज",
            "कम प्रीमियम पीक विमा व्याप्त",
        ],
        eligibility: [
            "Any farmer including sharecroppers",
            "किसी भी किसान जिसमें बटाईदार शामिल हैं",
            "कोणताही शेतकरी ज्यात शेअरक्रॉपर समाविष्ट",
        ],
        documents: [
            "Aadhaar Card, Land Records, Bank Account",
            "आधार कार्ड, भूमि रिकॉर्ड, बैंक खाता",
            "आधार कार्ड, जमीन रेकॉर्ड्स, बँक खाते",
        ],
        how_to_apply: [
            "1. Visit bank or CSC\n2. Fill application form\n3. Pay premium\n4. Get policy",
            "1. बैंक या CSC जाएं\n2. आवेदन पत्र भरें\n3. प्रीमियम का भुगतान करें\n4. पॉलिसी प्राप्त करें",
            "1. बँक किंवा CSC ला भेट द्या\n2. अर्ज भरा\n3. प्रीमियम भरा\n4. पॉलिसी मिळवा",
        ],
        official_link: "https://pmfby.gov.in",
        deadline: "2025-11-30",
        min_age: 18,
        max_age: 80,
        gender: Gender::All,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "Pradhan Mantri Awas Yojana (Rural)",
            "प्रधानमंत्री आवास योजना (ग्रामीण)",
            "प्रधानमंत्री आवास योजना (ग्रामीण)",
        ],
        category: SchemeCategory::Housing,
        description: [
            "Housing for all rural poor families",
            "सभी गरीब ग्रामीण परिवारों के लिए आवास",
            "सर्व गरीब ग्रामीण कुटुंबांसाठी घर",
        ],
        benefits: [
            "₹1.20 lakh in plains, ₹1.30 lakh in hilly areas",
            "मैदानों में ₹1.20 लाख, पहाड़ी क्षेत्रों में ₹1.30 लाख",
            "पठारात ₹1.20 लाख, डोंगराळ भागात ₹1.30 लाख",
        ],
        eligibility: [
            "Rural household without pucca house",
            "पक्के घर के बिना ग्रामीण परिवार",
            "पक्के घराशिवाय ग्रामीण कुटुंब",
        ],
        documents: [
            "Aadhaar Card, Bank Account, Land Records",
            "आधार कार्ड, बैंक खाता, भूमि रिकॉर्ड",
            "आधार कार्ड, बँक खाते, जमीन रेकॉर्ड्स",
        ],
        how_to_apply: [
            "1. Apply at Gram Panchayat\n2. Wait for verification\n3. Get approval\n4. Construction begins",
            "1. ग्राम पंचायत में आवेदन करें\n2. सत्यापन की प्रतीक्षा करें\n3. अनुमोदन प्राप्त करें\n4. निर्माण शुरू होता है",
            "1. ग्राम पंचायतमध्ये अर्ज करा\n2. पडताळणीची वाट पाहा\n3. मंजूरी मिळवा\n4. बांधकाम सुरू होते",
        ],
        official_link: "https://pmayg.nic.in",
        deadline: "2024-12-31",
        min_age: 18,
        max_age: 60,
        gender: Gender::All,
        income_range: IncomeRange::Below3Lakh,
    },
    SeedScheme {
        name: [
            "Pradhan Mantri Awas Yojana (Urban)",
            "प्रधानमंत्री आवास योजना (शहरी)",
            "प्रधानमंत्री आवास योजना (शहरी)",
        ],
        category: SchemeCategory::Housing,
        description: [
            "Affordable housing for urban poor",
            "शहरी गरीबों के लिए किफायती आवास",
            "शहरी गरीबांसाठी स्वस्त घर",
        ],
        benefits: [
            "Interest subsidy on home loan",
            "होम लोन पर ब्याज सब्सिडी",
            "होम लोनवर व्याज सबसिडी",
        ],
        eligibility: [
            "Urban poor with income up to ₹18 lakh",
            "₹18 लाख तक की आय वाले शहरी गरीब",
            "₹18 लाखापर्यंत उत्पन्न असलेले शहरी गरीब",
        ],
        documents: [
            "Aadhaar Card, Bank Account, Income Certificate",
            "आधार कार्ड, बैंक खाता, आय प्रमाण पत्र",
            "आधार कार्ड, बँक खाते, उत्पन्न प्रमाणपत्र",
        ],
        how_to_apply: [
            "1. Apply online at PMAY portal\n2. Submit documents\n3. Wait for verification\n4. Get subsidy",
            "1. PMAY पोर्टल पर ऑनलाइन आवेदन करें\n2. दस्तावेज जमा करें\n3. सत्यापन की प्रतीक्षा करें\n4. सब्सिडी प्राप्त करें",
            "1. PMAY पोर्टलवर ऑनलाइन अर्ज करा\n2. कागदपत्रे सबमिट करा\n3. पडताळणीची वाट पाहा\n4. सबसिडी मिळवा",
        ],
        official_link: "https://pmaymis.gov.in",
        deadline: "2024-12-31",
        min_age: 18,
        max_age: 60,
        gender: Gender::All,
        income_range: IncomeRange::Below18Lakh,
    },
    SeedScheme {
        name: [
            "MGNREGA",
            "महात्मा गांधी राष्ट्रीय ग्रामीण रोजगार गारंटी अधिनियम",
            "महात्मा गांधी राष्ट्रीय ग्रामीण रोजगार हमी कायदा",
        ],
        category: SchemeCategory::Employment,
        description: [
            "100 days guaranteed wage employment",
            "100 दिन की गारंटीड वेतन रोजगार",
            "100 दिवस हमीत वेतन रोजगार",
        ],
        benefits: [
            "Minimum wages guaranteed, job cards",
            "न्यूनतम वेतन गारंटी, जॉब कार्ड",
            "किमान वेतन हमी, नोकरी कार्ड",
        ],
        eligibility: [
            "Adult members of rural households",
            "ग्रामीण परिवार के वयस्क सदस्य",
            "ग्रामीण कुटुंबातील प्रौढ सदस्य",
        ],
        documents: [
            "Aadhaar Card, Bank Account, Photo",
            "आधार कार्ड, बैंक खाता, फोटो",
            "आधार कार्ड, बँक खाते, फोटो",
        ],
        how_to_apply: [
            "1. Apply at Gram Panchayat\n2. Get Job Card\n3. Demand work in writing\n4. Work provided within 15 days",
            "1. ग्राम पंचायत में आवेदन करें\n2. जॉब कार्ड प्राप्त करें\n3. लिखित में काम की मांग करें\n4. 15 दिनों के भीतर काम मिलता है",
            "1. ग्राम पंचायतमध्ये अर्ज करा\n2. नोकरी कार्ड मिळवा\n3. लेखी कामाची मागणी करा\n4. 15 दिवसांत काम मिळते",
        ],
        official_link: "https://nrega.nic.in",
        deadline: "2024-12-31",
        min_age: 18,
        max_age: 60,
        gender: Gender::All,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "Pradhan Mantri Mudra Yojana",
            "प्रधानमंत्री मुद्रा योजना",
            "प्रधानमंत्री मुद्रा योजना",
        ],
        category: SchemeCategory::Employment,
        description: [
            "Loans up to ₹10 lakh for small businesses",
            "छोटे व्यवसायों के लिए ₹10 लाख तक का ऋण",
            "लहान व्यवसायांसाठी ₹10 लाखापर्यंत कर्ज",
        ],
        benefits: [
            "No collateral required, easy approval",
            "कोई गारंटी नहीं, आसान अनुमोदन",
            "कोणतीही जमानत नाही, सुलभ मंजूरी",
        ],
        eligibility: [
            "Any Indian citizen with business plan",
            "व्यवसाय योजना वाला कोई भी भारतीय नागरिक",
            "व्यवसाय योजना असलेला कोणताही भारतीय नागरिक",
        ],
        documents: [
            "Aadhaar Card, Business Plan, Address Proof",
            "आधार कार्ड, व्यवसाय योजना, पते का प्रमाण",
            "आधार कार्ड, व्यवसाय योजना, पत्त्याचा पुरावा",
        ],
        how_to_apply: [
            "1. Prepare business plan\n2. Apply at bank\n3. Submit documents\n4. Get loan",
            "1. व्यवसाय योजना तैयार करें\n2. बैंक में आवेदन करें\n3. दस्तावेज जमा करें\n4. ऋण प्राप्त करें",
            "1. व्यवसाय योजना तयार करा\n2. बँकमध्ये अर्ज करा\n3. कागदपत्रे सबमिट करा\n4. कर्ज मिळवा",
        ],
        official_link: "https://mudra.org.in",
        deadline: "2024-12-31",
        min_age: 18,
        max_age: 80,
        gender: Gender::All,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "Ayushman Bharat PM-JAY",
            "आयुष्मान भारत PM-JAY",
            "आयुष्मान भारत PM-JAY",
        ],
        category: SchemeCategory::Health,
        description: [
            "Health insurance coverage of ₹5 lakh per family",
            "प्रति परिवार ₹5 लाख का स्वास्थ्य बीमा कवरेज",
            "प्रति कुटुंब ₹5 लाख स्वास्थ्य विमा व्याप्त",
        ],
        benefits: [
            "Free treatment at empaneled hospitals",
            "सूचीबद्ध अस्पतालों में मुफ्त इलाज",
            "यादीतल्या रुग्णालयात विनामूल्य उपचार",
        ],
        eligibility: [
            "SECC identified families, no income limit",
            "SECC की पहचान वाले परिवार, कोई आय सीमा नहीं",
            "SECC ओळखलेली कुटुंबे, उत्पन्न मर्यादा नाही",
        ],
        documents: [
            "Aadhaar Card, Ration Card, SECC data",
            "आधार कार्ड, राशन कार्ड, SECC डेटा",
            "आधार कार्ड, रेशन कार्ड, SECC डेटा",
        ],
        how_to_apply: [
            "1. Visit empaneled hospital\n2. Get Ayushman card\n3. Avail free treatment",
            "1. सूचीबद्ध अस्पताल जाएं\n2. आयुष्मान कार्ड प्राप्त करें\n3. मुफ्त इलाज प्राप्त करें",
            "1. यादीतल्या रुग्णालयात जा\n2. आयुष्मान कार्ड मिळवा\n3. विनामूल्य उपचार घ्या",
        ],
        official_link: "https://pmjay.gov.in",
        deadline: "2024-12-31",
        min_age: 0,
        max_age: 80,
        gender: Gender::All,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "Pradhan Mantri Suraksha Bima Yojana",
            "प्रधानमंत्री सुरक्षा बीमा योजना",
            "प्रधानमंत्री सुरक्षा विमा योजना",
        ],
        category: SchemeCategory::Health,
        description: [
            "Accident insurance cover of ₹2 lakh",
            "₹2 लाख का दुर्घटना बीमा कवर",
            "₹2 लाखाचा अपघात विमा",
        ],
        benefits: [
            "Premium only ₹20 per year",
            "सालाना केवल ₹20 प्रीमियम",
            "वर्षातून फक्त ₹20 प्रीमियम",
        ],
        eligibility: [
            "Age 18-70 years with bank account",
            "18-70 वर्ष का बैंक खाता",
            "18-70 वर्ष बँक खाते असणे आवश्यक",
        ],
        documents: [
            "Aadhaar Card, Bank Account",
            "आधार कार्ड, बैंक खाता",
            "आधार कार्ड, बँक खाते",
        ],
        how_to_apply: [
            "1. Visit bank\n2. Fill form\n3. Pay premium\n4. Get certificate",
            "1. बैंक जाएं\n2. फॉर्म भरें\n3. प्रीमियम भुगतान करें\n4. प्रमाण पत्र प्राप्त करें",
            "1. बँकला भेट द्या\n2. फॉर्म भरा\n3. प्रीमियम भरा\n4. प्रमाणपत्र मिळवा",
        ],
        official_link: "https://pmjjby.gov.in",
        deadline: "2024-12-31",
        min_age: 18,
        max_age: 70,
        gender: Gender::All,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "National Scholarship Portal",
            "राष्ट्रीय छात्रवृत्ति पोर्टल",
            "राष्ट्रीय शिष्यवृत्ती पोर्टल",
        ],
        category: SchemeCategory::Student,
        description: [
            "Various scholarships for students",
            "छात्रों के लिए विभिन्न छात्रवृत्तियां",
            "विद्यार्थ्यांसाठी विविध शिष्यवृत्त्या",
        ],
        benefits: [
            "Scholarship amount ₹1000 to ₹75000",
            "₹1000 से ₹75000 तक छात्रवृत्ति राशि",
            "₹1000 ते ₹75000 शिष्यवृत्ती रक्कम",
        ],
        eligibility: [
            "Students studying in India, income criteria",
            "भारत में पढ़ने वाले छात्र, आय मानदंड",
            "भारतात शिकणारे विद्यार्थी, उत्पन्न निकष",
        ],
        documents: [
            "Aadhaar Card, Bank Account, Income Certificate, Marksheet",
            "आधार कार्ड, बैंक खाता, आय प्रमाण पत्र, अंकपत्र",
            "आधार कार्ड, बँक खाते, उत्पन्न प्रमाणपत्र, गुणपत्रक",
        ],
        how_to_apply: [
            "1. Visit NSP portal\n2. Register\n3. Fill application\n4. Submit documents",
            "1. NSP पोर्टल पर जाएं\n2. पंजीकरण करें\n3. आवेदन भरें\n4. दस्तावेज जमा करें",
            "1. NSP पोर्टलवर जा\n2. नोंदणी करा\n3. अर्ज भरा\n4. कागदपत्रे सबमिट करा",
        ],
        official_link: "https://scholarships.gov.in",
        deadline: "2024-10-31",
        min_age: 5,
        max_age: 35,
        gender: Gender::All,
        income_range: IncomeRange::Below8Lakh,
    },
    SeedScheme {
        name: [
            "PM YASASVI Scholarship",
            "PM YASASVI छात्रवृत्ति",
            "PM YASASVI शिष्यवृत्ती",
        ],
        category: SchemeCategory::Student,
        description: [
            "Scholarship for OBC, EBC, DNT students",
            "OBC, EBC, DNT छात्रों के लिए छात्रवृत्ति",
            "OBC, EBC, DNT विद्यार्थ्यांसाठी शिष्यवृत्ती",
        ],
        benefits: [
            "₹75000 per year for Class 11-12",
            "कक्षा 11-12 के लिए सालाना ₹75000",
            "इयत्ता 11-12 साठी वर्षातून ₹75000",
        ],
        eligibility: [
            "OBC, EBC, DNT category students",
            "OBC, EBC, DNT श्रेणी के छात्र",
            "OBC, EBC, DNT श्रेणीतील विद्यार्थी",
        ],
        documents: [
            "Aadhaar Card, Bank Account, Caste Certificate, Income Certificate",
            "आधार कार्ड, बैंक खाता, जात प्रमाण पत्र, आय प्रमाण पत्र",
            "आधार कार्ड, बँक खाते, जात प्रमाणपत्र, उत्पन्न प्रमाणपत्र",
        ],
        how_to_apply: [
            "1. Visit NSP or state portal\n2. Apply as YASASVI\n3. Submit documents\n4. Get scholarship",
            "1. NSP या राज्य पोर्टल पर जाएं\n2. YASASVI के रूप में आवेदन करें\n3. दस्तावेज जमा करें\n4. छात्रवृत्ति प्राप्त करें",
            "1. NSP किंवा राज्य पोर्टलवर जा\n2. YASASVI म्हणून अर्ज करा\n3. कागदपत्रे सबमिट करा\n4. शिष्यवृत्ती मिळवा",
        ],
        official_link: "https://yet.nta.ac.in",
        deadline: "2024-10-31",
        min_age: 13,
        max_age: 25,
        gender: Gender::All,
        income_range: IncomeRange::Below2HalfLakh,
    },
    SeedScheme {
        name: [
            "Beti Bachao Beti Padhao",
            "बेटी बचाओ बेटी पढ़ाओ",
            "मुली वाचवा, मुली शिकवा",
        ],
        category: SchemeCategory::Women,
        description: [
            "Save girl child, educate girl child",
            "बच्ची को बचाएं, बच्ची को पढ़ाएं",
            "मुलीचे संरक्षण करा, मुलीला शिकवा",
        ],
        benefits: [
            "Awareness programs, welfare schemes",
            "जागरूकता कार्यक्रम, कल्याण योजनाएं",
            "जागरूकता कार्यक्रम, कल्याण योजना",
        ],
        eligibility: [
            "Girl child and women",
            "बच्ची और महिलाएं",
            "मुलगी आणि महिला",
        ],
        documents: [
            "Aadhaar Card, Birth Certificate",
            "आधार कार्ड, जन्म प्रमाण पत्र",
            "आधार कार्ड, जन्म प्रमाणपत्र",
        ],
        how_to_apply: [
            "1. Visit Anganwadi center\n2. Get benefits\n3. Enroll girl child",
            "1. आंगनवाडी केंद्र जाएं\n2. लाभ प्राप्त करें\n3. बच्ची को दर्ज करें",
            "1. आंगणवाडी केंद्रात जा\n2. लाभ मिळवा\n3. मुलीची नोंदणी करा",
        ],
        official_link: "https://wcd.nic.in",
        deadline: "2024-12-31",
        min_age: 0,
        max_age: 80,
        gender: Gender::Female,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "Sukanya Samriddhi Yojana",
            "सुकन्या समृद्धि योजना",
            "सुकन्या समृद्धी योजना",
        ],
        category: SchemeCategory::Women,
        description: [
            "Savings scheme for girl child",
            "बच्ची के लिए बचत योजना",
            "मुलीसाठी बचत योजना",
        ],
        benefits: [
            "High interest rate, tax benefits",
            "उच्च ब्याज दर, कर लाभ",
            "उच्च व्याजदर, कर लाभ",
        ],
        eligibility: [
            "Girl child below 10 years",
            "10 वर्ष से कम उम्र की बच्ची",
            "10 वर्षाखालील मुलगी",
        ],
        documents: [
            "Girl child birth certificate, Parent Aadhaar",
            "बच्ची का जन्म प्रमाण पत्र, माता-पिता का आधार",
            "मुलीचा जन्म प्रमाणपत्र, पालकांचा आधार",
        ],
        how_to_apply: [
            "1. Visit post office or bank\n2. Open account for girl\n3. Deposit regularly",
            "1. डाकघर या बैंक जाएं\n2. बच्ची के लिए खाता खोलें\n3. नियमित जमा करें",
            "1. पोस्ट ऑफिस किंवा बँकला भेट द्या\n2. मुलीसाठी खाते उघडा\n3. नियमित पैसे ठेवा",
        ],
        official_link: "https://indiapost.gov.in",
        deadline: "2024-12-31",
        min_age: 0,
        max_age: 10,
        gender: Gender::Female,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: [
            "Pradhan Mantri Jan Dhan Yojana",
            "प्रधानमंत्री जन धन योजना",
            "प्रधानमंत्री जन धन योजना",
        ],
        category: SchemeCategory::Other,
        description: [
            "Zero balance bank account for all",
            "सभी के लिए शून्य बैलेंस बैंक खाता",
            "सर्वांसाठी शून्य बैलेंस बँक खाते",
        ],
        benefits: [
            "Free RuPay debit card, insurance cover",
            "मुफ्त RuPay डेबिट कार्ड, बीमा कवर",
            "मोफत RuPay डेबिट कार्ड, विमा व्याप्त",
        ],
        eligibility: [
            "Any Indian citizen without bank account",
            "बैंक खाता नहीं होने वाला कोई भी भारतीय नागरिक",
            "बँक खाता नसलेला कोणताही भारतीय नागरिक",
        ],
        documents: ["Aadhaar Card, Photo", "आधार कार्ड, फोटो", "आधार कार्ड, फोटो"],
        how_to_apply: [
            "1. Visit nearest bank\n2. Fill account form\n3. Get zero balance account",
            "1. निकटतम बैंक जाएं\n2. खाता फॉर्म भरें\n3. शून्य बैलेंस खाता प्राप्त करें",
            "1. जवळच्या बँकला भेट द्या\n2. खाते फॉर्म भरा\n3. शून्य बैलेंस खाते मिळवा",
        ],
        official_link: "https://pmjdy.gov.in",
        deadline: "2024-12-31",
        min_age: 10,
        max_age: 80,
        gender: Gender::All,
        income_range: IncomeRange::All,
    },
    SeedScheme {
        name: ["Atal Pension Yojana", "अटल पेंशन योजना", "अटल पेंशन योजना"],
        category: SchemeCategory::Other,
        description: [
            "Pension scheme for unorganized sector",
            "असंगठित क्षेत्र के लिए पेंशन योजना",
            "असंगठित क्षेत्रासाठी पेंशन योजना",
        ],
        benefits: [
            "Guaranteed pension ₹1000 to ₹5000",
            "गारंटीड पेंशन ₹1000 से ₹5000",
            "हमीत पेंशन ₹1000 ते ₹5000",
        ],
        eligibility: [
            "Age 18-40 years, must have bank account",
            "18-40 वर्ष, बैंक खाता होना चाहिए",
            "18-40 वर्ष, बँक खाता असणे आवश्यक",
        ],
        documents: [
            "Aadhaar Card, Bank Account",
            "आधार कार्ड, बैंक खाता",
            "आधार कार्ड, बँक खाते",
        ],
        how_to_apply: [
            "1. Visit bank\n2. Fill APY form\n3. Choose pension amount\n4. Start contributing",
            "1. बैंक जाएं\n2. APY फॉर्म भरें\n3. पेंशन राशि चुनें\n4. योगदान शुरू करें",
            "1. बँकला भेट द्या\n2. APY फॉर्म भरा\n3. पेंशन रक्कम निवडा\n4. योगदान सुरू करा",
        ],
        official_link: "https://npscra.nsdl.co.in",
        deadline: "2024-12-31",
        min_age: 18,
        max_age: 40,
        gender: Gender::All,
        income_range: IncomeRange::Below7HalfLakh,
    },
];
