use std::collections::HashMap;

use crate::models::Locale;

pub const MISSING_TRANSLATION: &str = "Response not available in selected language.";

/// Mapping from (topic key, locale) to the canned advisory string. Lookup
/// falls back to the English entry when the locale is absent, and to a static
/// placeholder when the key itself is absent.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    entries: HashMap<&'static str, Vec<(Locale, &'static str)>>,
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        let mut entries = HashMap::new();
        for (key, variants) in CATALOG {
            entries.insert(*key, variants.to_vec());
        }
        Self { entries }
    }
}

impl ResponseCatalog {
    pub fn message(&self, key: &str, locale: Locale) -> &'static str {
        let Some(variants) = self.entries.get(key) else {
            return MISSING_TRANSLATION;
        };

        variants
            .iter()
            .find(|(entry_locale, _)| *entry_locale == locale)
            .or_else(|| variants.iter().find(|(entry_locale, _)| *entry_locale == Locale::En))
            .map(|(_, text)| *text)
            .unwrap_or(MISSING_TRANSLATION)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

use Locale::{Bn, En, Hi, Mr, Ta, Te};

type Entry = (&'static str, &'static [(Locale, &'static str)]);

#[rustfmt::skip]
const CATALOG: &[Entry] = &[
    ("weather_response", &[
        (En, "Today's weather: Temperature 28°C, Humidity 65%, Partly cloudy. Wind speed 12 km/h. Good conditions for farming activities."),
        (Hi, "आज का मौसम: तापमान 28°C, नमी 65%, आंशिक बादल। हवा की गति 12 किमी/घंटा। खेती के लिए अच्छी परिस्थितियां।"),
        (Te, "ఈ రోజు వాతావరణం: ఉష్ణోగ్రత 28°C, తేమ 65%, పాక్షికంగా మేఘాలు। గాలి వేగం 12 కిమీ/గంట। వేసవి కోసం మంచి పరిస్థితులు।"),
        (Ta, "இன்றைய வானிலை: வெப்பநிலை 28°C, ஈரப்பதம் 65%, சில மேகங்கள்। காற்றின் வேகம் 12 கி.மீ/மணி। விவசாயத்திற்கு நல்ல சூழநிலை।"),
        (Bn, "আজের আবহাওয়া: তাপমাত্রা 28°C, আর্দ্রতা 65%, আংশিক মেঘলা। বাতাসের গতি 12 কিমি/ঘন্টা। চাষাবাদের জন্য ভাল অবস্থা।"),
        (Mr, "आजचे हवामान: तापमान 28°C, आर्द्रता 65%, अंशतः ढगाळ। वार्याचा वेग 12 किमी/तास। शेतीसाठी चांगली परिस्थिती।"),
    ]),
    ("market_response", &[
        (En, "Current market prices: Rice ₹2000/quintal, Wheat ₹2100/quintal, Cotton ₹5750/quintal, Tomato ₹1000/quintal. Prices updated today."),
        (Hi, "वर्तमान बाजार भाव: चावल ₹2000/क्विंटल, गेहूं ₹2100/क्विंटल, कपास ₹5750/क्विंटल, टमाटर ₹1000/क्विंटल। आज की दरें।"),
        (Te, "ప్రస్తుత మార్కెట్ ధరలు: అక్కి ₹2000/క్వింటల్, గోధుమలు ₹2100/క్వింటల్, పట్టి ₹5750/క్వింటల్, టమాటో ₹1000/క్వింటల్। ఈ రోజు ధరలు।"),
        (Ta, "தற்போதைய சந்தை விலைகள்: அரிசி ₹2000/குவிண்டல், கோதுமை ₹2100/குவிண்டல், பருத்தி ₹5750/குவிண்டல், தக்காளி ₹1000/குவிண்டல்। இன்றைய விலைகள்।"),
        (Bn, "বর্তমান বাজার দাম: চাল ₹2000/কুইন্টাল, গম ₹2100/কুইন্টাল, তুলা ₹5750/কুইন্টাল, টমেটো ₹1000/কুইন্টাল। আজকের দাম।"),
        (Mr, "सध्याच्या बाजारभाव: तांदूळ ₹2000/क्विंटल, गहू ₹2100/क्विंटल, कापूस ₹5750/क्विंटल, टोमेटो ₹1000/क्विंटल। आजचे दर।"),
    ]),
    ("pest_response", &[
        (En, "Pest Control: 1) Identify pest type. 2) Neem oil spray (10ml/liter). 3) Spray morning/evening. 4) Repeat after 7 days. 5) Maintain field hygiene. 6) For severe cases, consult officer."),
        (Hi, "कीट नियंत्रण: 1) कीट की पहचान करें। 2) नीम तेल का छिड़काव (10 मिली/लीटर)। 3) सुबह/शाम छिड़कें। 4) 7 दिन बाद दोहराएं। 5) खेत की स्वच्छता बनाए रखें। 6) गंभीर मामलों में अधिकारी से संपर्क करें।"),
        (Te, "కీటకాల నియంత్రణ: 1) కీటకాల రకం గుర్తించండి। 2) వేప నుణ్ణె స్ప్రే (10మిలీ/లీటర్)। 3) ఉదయం/సాయంత్రం స్ప్రే చేయండి। 4) 7 రోజుల తర్వాత పునరావృతం చేయండి। 5) వెల స్వచ్ఛత నిర్వహించండి। 6) తీవ్రమైన సందర్భాల్లో అధికారిని సంప్రదించండి।"),
        (Ta, "கீட்டுக் கட்டுப்பாடு: 1) கீட்டு வகையை கண்டறியுங்கள்। 2) வேப்பெண்ணெய் தெளிப்பு (10மிலி/லிட்டர்)। 3) காலை/மாலை தெளிக்கவும்। 4) 7 நாட்களுக்கு பிறகு மீண்டும் செய்யுங்கள்। 5) வயல் சுத்தமாக பராமரிக்கவும்।"),
        (Bn, "কীটপতঙ্গ নিয়ন্ত্রণ: 1) কীটপতঙ্গের ধরন চিহ্নিত করুন। 2) নিম তেলের স্প্রে (10মিলি/লিটার)। 3) সকাল/সন্ধ্যায় স্প্রে করুন। 4) 7 দিন পর পুনরায় করুন। 5) ক্ষেতের স্বচ্ছতা বজায় রাখুন।"),
        (Mr, "कीटक नियंत्रण: 1) कीटकाचा प्रकार ओळखा। 2) कडूनिंबाच्या तेलाची फवारणी (10मिली/लिटर)। 3) सकाळी/संध्याकाळी फवारा। 4) 7 दिवसांनंतर पुन्हा करा। 5) शेताची स्वच्छता ठेवा।"),
    ]),
    ("pest_control", &[
        (En, "Pest Control Methods: 1) Identify the pest first. 2) Neem oil spray (10ml/liter) - organic option. 3) Chemical pesticides - use as per label. 4) Spray early morning or evening. 5) Repeat after 7 days. 6) Maintain field hygiene. 7) Use sticky traps. 8) Encourage natural predators. For specific pest identification, describe the pest or upload photo."),
    ]),
    ("disease_response", &[
        (En, "Plant diseases: Look for spots, wilting, discoloration. Remove infected parts, apply fungicide, improve ventilation."),
        (Hi, "पौधों की बीमारी: धब्बे, मुरझाना देखें। संक्रमित भाग हटाएं, फफूंदनाशी लगाएं।"),
        (Te, "మొక్కల వ్యాధి: మచ్చలు, వాడిపోవడం చూడండి। సోకిన భాగాలు తొలగించండి।"),
        (Ta, "தாவர நோய்: புள்ளிகள், வாடுதல் பாருங்கள். பாதிக்கப்பட்ட பகுதிகளை அகற்றவும்."),
        (Bn, "উদ্ভিদ রোগ: দাগ, শুকিয়ে যাওয়া দেখুন। সংক্রমিত অংশ সরান।"),
        (Mr, "वनस्पती रोग: ठिपके, कोमेजणे पहा। संक्रमित भाग काढा।"),
    ]),
    ("fertilizer_response", &[
        (En, "Fertilizer: Apply NPK based on soil test. Basal dose at sowing, top dressing during growth."),
        (Hi, "उर्वरक: मिट्टी परीक्षण के अनुसार NPK डालें। बुवाई पर बेसल, वृद्धि में टॉप ड्रेसिंग।"),
        (Te, "ఎరువులు: నేల పరీక్ష ఆధారంగా NPK వేయండి। విత్తడంలో బేసల్, పెరుగుదలలో టాప్ డ్రెస్సింగ్."),
        (Ta, "உரம்: மண் பரிசோதனை அடிப்படையில் NPK இடவும். விதைப்பில் அடிப்படை, வளர்ச்சியில் மேல் உரம்."),
        (Bn, "সার: মাটি পরীক্ষা অনুযায়ী NPK দিন। বপনে বেসাল, বৃদ্ধিতে টপ ড্রেসিং।"),
        (Mr, "खत: माती चाचणीनुसार NPK घाला। पेरणीत बेसल, वाढीत टॉप ड्रेसिंग।"),
    ]),
    ("irrigation_response", &[
        (En, "Irrigation: Drip saves 40% water. Spray early morning/evening. Check soil moisture 4-6 inches deep."),
        (Hi, "सिंचाई: ड्रिप 40% पानी बचाता है। सुबह/शाम छिड़काव करें। 4-6 इंच गहरी मिट्टी की नमी जांचें।"),
        (Te, "నీటిపారుదల: డ్రిప్ 40% నీరు ఆదా చేస్తుంది। ఉదయం/సాయంత్రం స్ప్రే చేయండి।"),
        (Ta, "நீர்ப்பாசனம்: சொட்டு நீர் 40% தண்ணீர் சேமிக்கும். காலை/மாலை தெளிக்கவும்."),
        (Bn, "সেচ: ড্রিপ 40% জল সাশ্রয় করে। সকাল/সন্ধ্যা স্প্রে করুন।"),
        (Mr, "सिंचन: ठिबक 40% पाणी वाचवते। सकाळी/संध्याकाळी फवारा।"),
    ]),
    ("planting_response", &[
        (En, "Planting: Get soil tested, use certified seeds, sow at right time, proper spacing & depth."),
        (Hi, "बुवाई: मिट्टी परीक्षण कराएं, प्रमाणित बीज उपयोग करें, सही समय पर बोएं।"),
        (Te, "విత్తడం: నేల పరీక్ష చేయించండి, ధృవీకరించిన విత్తనాలు ఉపయోగించండి।"),
        (Ta, "நடவு: மண் பரிசோதனை செய்யவும், சான்றளிக்கப்பட்ட விதைகள் பயன்படுத்தவும்."),
        (Bn, "রোপণ: মাটি পরীক্ষা করান, প্রত্যয়িত বীজ ব্যবহার করুন।"),
        (Mr, "पेरणी: माती चाचणी करा, प्रमाणित बियाणे वापरा।"),
    ]),
    ("harvest_response", &[
        (En, "Harvesting: Check maturity signs, avoid rain, dry properly (12-14% moisture), store in dry place."),
        (Hi, "कटाई: परिपक्वता संकेत जांचें, बारिश से बचें, अच्छी तरह सुखाएं।"),
        (Te, "కోత: పరిపక్వత సంకేతాలు తనిఖీ చేయండి, వర్షం నుండి దూరంగా ఉండండి।"),
        (Ta, "அறுவடை: முதிர்வு அறிகுறிகள் சரிபார்க்கவும், மழையை தவிர்க்கவும்."),
        (Bn, "ফসল কাটা: পরিপক্কতা চিহ্ন পরীক্ষা করুন, বৃষ্টি এড়িয়ে চলুন।"),
        (Mr, "कापणी: परिपक्वता चिन्हे तपासा, पाऊस टाळा।"),
    ]),
    ("soil_general", &[
        (En, "Soil types: Sandy (light), Clayey (heavy), Loam (best). Get pH tested. Add organic matter for improvement."),
        (Hi, "मिट्टी के प्रकार: रेतीली (हल्की), चिकनी (भारी), दोमट (सर्वोत्तम)। pH जांच कराएं।"),
        (Te, "మట్టి రకాలు: ఇసుక (తేలికైన), బంకమట్టి (భారీ), లోమ్ (ఉత్తమమైన)।"),
        (Ta, "மண் வகைகள்: மணல் (இலகு), களிமண் (கனமான), கலவை (சிறந்த)."),
        (Bn, "মাটির প্রকার: বালি (হালকা), কাদামাটি (ভারী), দোআঁশ (সেরা)।"),
        (Mr, "मातीचे प्रकार: वाळूमय (हलकी), चिकणमाती (जड), दुफळी (उत्तम)।"),
    ]),
    ("soil_rice", &[
        (En, "Best soil for rice: Clayey loam with good water retention. pH: 5.5-6.5. Soil should retain water well for flooded conditions."),
        (Hi, "चावल के लिए सर्वोत्तम मिट्टी: चिकनी दोमट मिट्टी जो पानी अच्छी तरह रोक सके। pH: 5.5-6.5."),
        (Te, "ధాన్యం కోసం ఉత్తమ మణ్ణు: నీరు ధారణ క్షమత ఉన్న చెంబు లోమ్ మణ్ణు। pH: 5.5-6.5."),
        (Ta, "அரிசிக்கு சிறந்த மண்: நல்ல நீர் தங்கு திறனுடன் கலவை கருந்து மண்। pH: 5.5-6.5."),
        (Bn, "চালের জন্য সেরা মাটি: ভাল জল ধারণ ক্ষমতা সহ দোআঁশ মাটি। pH: 5.5-6.5."),
        (Mr, "तांदूळासाठी सर्वोत्तम माती: चांगल्या जलधारण क्षमतेसह चिकणी माती। pH: 5.5-6.5."),
    ]),
    ("soil_wheat", &[
        (En, "Wheat soil: Well-drained loam, pH 6.0-7.5"),
        (Hi, "गेहूं की मिट्टी: सुजल निकासी वाली दोमट, pH 6.0-7.5"),
        (Te, "గోధుమల మట్టి: మంచి పారుదల లోమ్, pH 6.0-7.5"),
        (Ta, "கோதுமை மண்: நல்ல வடிகால் கலவை, pH 6.0-7.5"),
        (Bn, "গমের মাটি: ভাল নিষ্কাশিত দোআঁশ, pH 6.0-7.5"),
        (Mr, "गव्हाची माती: चांगला निचरा असलेली, pH 6.0-7.5"),
    ]),
    ("soil_cotton", &[
        (En, "Cotton soil: Deep black soil (regur), pH 6.5-8.0"),
        (Hi, "कपास की मिट्टी: गहरी काली मिट्टी, pH 6.5-8.0"),
        (Te, "పత్తి మట్టి: లోతైన నల్ల మట్టి, pH 6.5-8.0"),
        (Ta, "பருத்தி மண்: ஆழமான கருப்பு மண், pH 6.5-8.0"),
        (Bn, "তুলার মাটি: গভীর কালো মাটি, pH 6.5-8.0"),
        (Mr, "कापसाची माती: खोल काळी माती, pH 6.5-8.0"),
    ]),
    ("soil_vegetable", &[
        (En, "Vegetable soil: Rich loam with organic matter, pH 6.0-7.0"),
        (Hi, "सब्जी की मिट्टी: जैविक पदार्थ युक्त समृद्ध दोमट, pH 6.0-7.0"),
        (Te, "కూరగాయల మట్టి: సేంద్రియ పదార్థంతో సమృద్ధి లోమ్, pH 6.0-7.0"),
        (Ta, "காய்கறி மண்: கரிமப் பொருள் கொண்ட வளமான கலவை, pH 6.0-7.0"),
        (Bn, "সবজির মাটি: জৈব পদার্থ সমৃদ্ধ দোআঁশ, pH 6.0-7.0"),
        (Mr, "भाजीपाल्याची माती: सेंद्रिय पदार्थ समृद्ध, pH 6.0-7.0"),
    ]),
    ("soil_sugarcane", &[
        (En, "Sugarcane soil: Deep loam, good drainage, pH 6.5-7.5"),
        (Hi, "गन्ने की मिट्टी: गहरी दोमट, अच्छी निकासी, pH 6.5-7.5"),
        (Te, "చెరకు మట్టి: లోతైన లోమ్, మంచి పారుదల, pH 6.5-7.5"),
        (Ta, "கரும்பு மண்: ஆழமான கலவை, நல்ல வடிகால், pH 6.5-7.5"),
        (Bn, "আখের মাটি: গভীর দোআঁশ, ভাল নিষ্কাশন, pH 6.5-7.5"),
        (Mr, "ऊसाची माती: खोल दुफळी, चांगला निचरा, pH 6.5-7.5"),
    ]),
    ("variety_response", &[
        (En, "Crop varieties: Use certified high-yielding varieties suitable for your region. Contact local agriculture office."),
        (Hi, "फसल किस्में: अपने क्षेत्र के लिए उपयुक्त प्रमाणित उच्च उपज वाली किस्में उपयोग करें।"),
        (Te, "పంట రకాలు: మీ ప్రాంతానికి అనుకూలమైన ధృవీకరించిన అధిక దిగుబడి రకాలు ఉపయోగించండి।"),
        (Ta, "பயிர் வகைகள்: உங்கள் பகுதிக்கு ஏற்ற சான்றளிக்கப்பட்ட அதிக விளைச்சல் வகைகள் பயன்படுத்தவும்."),
        (Bn, "ফসলের জাত: আপনার অঞ্চলের জন্য উপযুক্ত প্রত্যয়িত উচ্চফলনশীল জাত ব্যবহার করুন।"),
        (Mr, "पिकाच्या जाती: तुमच्या प्रदेशासाठी योग्य प्रमाणित उच्च उत्पन्न जाती वापरा।"),
    ]),
    ("scheme_pmkisan", &[
        (En, "PM-KISAN: ₹6000/year direct income support paid in three installments to landholding farmer families. Register with Aadhaar and land records at your nearest agriculture office or pmkisan.gov.in."),
    ]),
    ("scheme_pmfby", &[
        (En, "Crop Insurance (PMFBY): Protection against crop loss from natural calamities at low premium (2% Kharif, 1.5% Rabi). Enroll through your bank or Common Service Centre before the season cutoff."),
    ]),
    ("scheme_kcc", &[
        (En, "Kisan Credit Card: Easy crop-loan credit at 4% effective interest, up to ₹3 lakh. Apply at any bank branch with land documents and Aadhaar."),
    ]),
    ("scheme_soilcard", &[
        (En, "Soil Health Card: Free soil testing with fertilizer recommendations every 2 years. Collect your sample slip from the nearest Krishi Vigyan Kendra."),
    ]),
    ("scheme_subsidy", &[
        (En, "Equipment Subsidy: 40-50% subsidy on tractors and farm implements under state mechanization schemes. Apply through the agriculture department portal with quotation and land records."),
    ]),
    ("scheme_msp", &[
        (En, "MSP (Minimum Support Price): Guaranteed procurement price announced for 23 crops each season. Sell at registered procurement centres; check current rates at your mandi."),
    ]),
    ("scheme_response", &[
        (En, "Government Schemes for Farmers:\n\n1️⃣ PM-KISAN: ₹6000/year direct income support\n2️⃣ Crop Insurance (PMFBY): Protection against crop loss, low premium\n3️⃣ Kisan Credit Card: Easy credit at 4% interest, up to ₹3 lakh\n4️⃣ Soil Health Card: Free soil testing and recommendations\n5️⃣ Equipment Subsidy: 40-50% subsidy on tractors & implements\n6️⃣ MSP (Minimum Support Price): Guaranteed price for 23 crops\n\nVisit your nearest Krishi Vigyan Kendra or Agriculture Department for applications."),
        (Hi, "किसानों के लिए सरकारी योजनाएं:\n\n1️⃣ PM-KISAN: ₹6000/वर्ष प्रत्यक्ष आय सहायता\n2️⃣ फसल बीमा (PMFBY): फसल नुकसान से सुरक्षा, कम प्रीमियम\n3️⃣ किसान क्रेडिट कार्ड: 4% ब्याज पर आसान ऋण, ₹3 लाख तक\n4️⃣ मृदा स्वास्थ्य कार्ड: मुफ्त मिट्टी परीक्षण\n5️⃣ उपकरण सब्सिडी: ट्रैक्टर और औजारों पर 40-50% सब्सिडी\n6️⃣ MSP (न्यूनतम समर्थन मूल्य): 23 फसलों के लिए गारंटीड मूल्य\n\nआवेदन के लिए निकटतम कृषि विज्ञान केंद्र या कृषि विभाग जाएं।"),
        (Te, "రైతులకు ప్రభుత్వ పథకాలు:\n\n1️⃣ PM-KISAN: ₹6000/సంవత్సరం ప్రత్యక్ష ఆదాయ మద్దతు\n2️⃣ పంట బీమా (PMFBY): పంట నష్టం నుండి రక్షణ, తక్కువ ప్రీమియం\n3️⃣ కిసాన్ క్రెడిట్ కార్డ్: 4% వడ్డీతో సులభ రుణం, ₹3 లక్షల వరకు\n4️⃣ నేల ఆరోగ్య కార్డ్: ఉచిత నేల పరీక్ష\n5️⃣ పరికరాల సబ్సిడీ: ట్రాక్టర్లపై 40-50% సబ్సిడీ\n6️⃣ MSP (కనీస మద్దతు ధర): 23 పంటలకు హామీ ధర\n\nదరఖాస్తుల కోసం సమీప కృషి విజ్ఞాన కేంద్రం సందర్శించండి!"),
        (Ta, "விவசாயிகளுக்கான அரசு திட்டங்கள்:\n\n1️⃣ PM-KISAN: ₹6000/ஆண்டு நேரடி வருமான ஆதரவு\n2️⃣ பயிர் காப்பீடு (PMFBY): குறைந்த பிரீமியம்\n3️⃣ கிசான் கடன் அட்டை: 4% வட்டியில் கடன், ₹3 லட்சம் வரை\n4️⃣ மண் ஆரோக்கிய அட்டை: இலவச மண் பரிசோதனை\n5️⃣ உபகரண மானியம்: 40-50% மானியம்\n6️⃣ MSP: 23 பயிர்களுக்கு உத்தரவாத விலை\n\nஅருகிலுள்ள வேளாண்மைத் துறையை அணுகவும்!"),
        (Bn, "কৃষকদের জন্য সরকারি পরিকল্পনা:\n\n1️⃣ PM-KISAN: ₹6000/বছর প্রত্যক্ষ আয় সহায়তা\n2️⃣ ফসল বীমা (PMFBY): কম প্রিমিয়াম\n3️⃣ কিষাণ ক্রেডিট কার্ড: 4% সুদে ঋণ, ₹3 লক্ষ পর্যন্ত\n4️⃣ মাটি স্বাস্থ্য কার্ড: বিনামূল্যে মাটি পরীক্ষা\n5️⃣ যন্ত্রপাতি ভর্তুকি: 40-50% ভর্তুকি\n6️⃣ MSP: 23টি ফসলের নিশ্চিত মূল্য\n\nনিকটবর্তী কৃষি বিভাগে যান!"),
        (Mr, "शेतकर्‍यांसाठी शासकीय योजना:\n\n1️⃣ PM-KISAN: ₹6000/वर्ष थेट उत्पन्न समर्थन\n2️⃣ पीक विमा (PMFBY): कमी प्रीमियम\n3️⃣ किसान क्रेडिट कार्ड: 4% व्याजावर कर्ज, ₹3 लाख पर्यंत\n4️⃣ माती आरोग्य कार्ड: मोफत माती चाचणी\n5️⃣ उपकरण अनुदान: 40-50% अनुदान\n6️⃣ MSP: 23 पिकांसाठी हमी किंमत\n\nजवळच्या कृषि विभागाला भेट द्या!"),
    ]),
    ("livestock_response", &[
        (En, "Livestock: Ensure proper feeding, vaccination, clean shelter. Contact veterinary officer for health issues."),
        (Hi, "पशुधन: उचित भोजन, टीकाकरण, स्वच्छ आश्रय सुनिश्चित करें। स्वास्थ्य के लिए पशु चिकित्सक से संपर्क करें।"),
        (Te, "పశువులు: సరైన ఆహారం, టీకాలు, శుభ్రమైన ఆశ్రయం నిర్ధారించండి।"),
        (Ta, "கால்நடை: சரியான உணவு, தடுப்பூசி, சுத்தமான தங்குமிடம் உறுதி செய்யவும்."),
        (Bn, "পশুপালন: সঠিক খাওয়ানো, টিকা, পরিষ্কার আশ্রয় নিশ্চিত করুন।"),
        (Mr, "पशुधन: योग्य आहार, लसीकरण, स्वच्छ निवारा सुनिश्चित करा।"),
    ]),
    ("organic_farming", &[
        (En, "Organic Farming: Use compost, vermicompost, green manure. Avoid chemical pesticides. Use neem, cow urine spray. Crop rotation important."),
        (Hi, "जैविक खेती: कम्पोस्ट, वर्मी कम्पोस्ट, हरी खाद का उपयोग करें। रासायनिक कीटनाशकों से बचें।"),
        (Te, "సేంద్రియ వ్యవసాయం: కంపోస్ట్, వర్మీ కంపోస్ట్, పచ్చి ఎరువు వాడండి। రసాయన పురుగుమందులు వద్దు।"),
        (Ta, "இயற்கை விவசாயம்: உரம், மண்புழு உரம், பசுந்தாள் உரம் பயன்படுத்தவும். வேதிப்பொருள் பூச்சிக்கொல்லிகளை தவிர்க்கவும்."),
        (Bn, "জৈব চাষ: কম্পোস্ট, ভার্মি কম্পোস্ট, সবুজ সার ব্যবহার করুন। রাসায়নিক কীটনাশক এড়িয়ে চলুন।"),
        (Mr, "सेंद्रिय शेती: कंपोस्ट, गांडूळ खत, हिरवळीच्या खताचा वापर करा। रासायनिक कीटकनाशके टाळा।"),
    ]),
    ("crop_rotation", &[
        (En, "Crop Rotation: Rice→Wheat→Pulses. Prevents soil exhaustion, pest buildup. Improves soil fertility naturally."),
        (Hi, "फसल चक्र: धान→गेहूं→दलहन। मिट्टी की थकान रोकता है। मिट्टी की उर्वरता सुधारता है।"),
        (Te, "పంట మార్పిడి: వరి→గోధుమలు→పప్పుధాన్యాలు। నేల అలసటను నివారిస్తుంది।"),
        (Ta, "பயிர் சுழற்சி: நெல்→கோதுமை→பருப்பு. மண் தளர்ச்சி தடுக்கும்."),
        (Bn, "ফসল আবর্তন: ধান→গম→ডাল। মাটির ক্লান্তি রোধ করে।"),
        (Mr, "पीक आवर्तन: तांदूळ→गहू→डाळ. मातीचा थकवा रोखतो।"),
    ]),
    ("seed_treatment", &[
        (En, "Seed Treatment: Soak in water 8-10 hrs. Treat with Trichoderma or carbendazim. Prevents disease, improves germination."),
        (Hi, "बीज उपचार: 8-10 घंटे पानी में भिगोएं। ट्राइकोडर्मा या कार्बेंडाजिम से उपचार करें।"),
        (Te, "విత్తన చికిత్స: 8-10 గంటలు నీటిలో నానబెట్టండి। ట్రైకోడెర్మాతో చికిత్స చేయండి।"),
        (Ta, "விதை சிகிச்சை: 8-10 மணி நீரில் ஊற வைக்கவும். ட்ரைக்கோடெர்மா கொண்டு சிகிச்சை."),
        (Bn, "বীজ চিকিত্সা: 8-10 ঘন্টা জলে ভিজিয়ে রাখুন। ট্রাইকোডার্মা দিয়ে চিকিত্সা করুন।"),
        (Mr, "बियाणे उपचार: 8-10 तास पाण्यात भिजवा. ट्रायकोडर्माने उपचार करा।"),
    ]),
    ("water_management", &[
        (En, "Water Management: Rainwater harvesting, mulching saves water. Drip best for vegetables. Check soil before watering."),
        (Hi, "जल प्रबंधन: वर्षा जल संचयन, मल्चिंग पानी बचाती है। सब्जियों के लिए ड्रिप सर्वोत्तम।"),
        (Te, "నీటి నిర్వహణ: వర్షపు నీటి సేకరణ, మల్చింగ్ నీరు ఆదా చేస్తుంది।"),
        (Ta, "நீர் மேலாண்மை: மழை நீர் சேமிப்பு, மல்ச்சிங் நீர் சேமிக்கும்."),
        (Bn, "জল ব্যবস্থাপনা: বৃষ্টির জল সংগ্রহ, মালচিং জল সাশ্রয় করে।"),
        (Mr, "पाणी व्यवस्थापन: पावसाचे पाणी साठवा, मल्चिंग पाणी वाचवते."),
    ]),
    ("composting", &[
        (En, "Composting: Mix dry+green waste, add water, turn weekly. Ready in 45-60 days. Rich in nutrients, improves soil."),
        (Hi, "कम्पोस्टिंग: सूखे+हरे कचरे मिलाएं, पानी डालें, साप्ताहिक पलटें। 45-60 दिन में तैयार।"),
        (Te, "కంపోస్టింగ్: పొడి+పచ్చి వ్యర్థాలు కలపండి, వారానికోసారి తిప్పండి। 45-60 రోజుల్లో సిద్ధం."),
        (Ta, "உரம் தயாரிப்பு: உலர்+பசுமை கழிவு கலக்கவும், வாரம் திருப்பவும். 45-60 நாட்களில் தயார்."),
        (Bn, "কম্পোস্টিং: শুকনো+সবুজ বর্জ্য মেশান, সাপ্তাহিক ঘুরান। 45-60 দিনে তৈরি।"),
        (Mr, "कंपोस्टिंग: कोरडा+हिरवा कचरा मिसळा, साप्ताहिक फिरवा। 45-60 दिवसात तयार।"),
    ]),
    ("pest_aphids", &[
        (En, "Aphid Control: Spray neem oil or soap water. Ladybugs eat aphids naturally. Check leaf undersides regularly."),
        (Hi, "एफिड नियंत्रण: नीम तेल या साबुन पानी छिड़कें। लेडीबग एफिड खाते हैं।"),
        (Te, "అఫిడ్ నియంత్రణ: వేప నూనె లేదా సబ్బు నీరు స్ప్రే చేయండి।"),
        (Ta, "அஃபிட் கட்டுப்பாடு: வேப்ப எண்ணெய் அல்லது சோப்பு தண்ணீர் தெளிக்கவும்."),
        (Bn, "অ্যাফিড নিয়ন্ত্রণ: নিম তেল বা সাবান জল স্প্রে করুন।"),
        (Mr, "अॅफिड नियंत्रण: कडुलिंबाचे तेल किंवा साबण पाणी फवारा."),
    ]),
    ("monsoon_prep", &[
        (En, "Monsoon Preparation: Clean drainage, check bunds. Store seeds early. Repair farm equipment. Plan Kharif crops."),
        (Hi, "मानसून तैयारी: जल निकासी साफ करें, मेड़ जांचें। बीज पहले से संग्रहीत करें।"),
        (Te, "వర్షాకాల తయారీ: డ్రైనేజీ శుభ్రం చేయండి, కట్టలు తనిఖీ చేయండి।"),
        (Ta, "பருவமழை தயாரிப்பு: வடிகால் சுத்தம் செய்யவும், கரைகள் சரிபார்க்கவும்."),
        (Bn, "মৌসুমী প্রস্তুতি: নিকাশি পরিষ্কার করুন, বাঁধ পরীক্ষা করুন।"),
        (Mr, "पावसाळा तयारी: निचरा स्वच्छ करा, बंधारे तपासा. खरीप पिकांची योजना करा।"),
    ]),
    ("drought_management", &[
        (En, "Drought Management: Mulch to retain moisture. Drip irrigation. Grow drought-resistant varieties. Rainwater harvesting critical."),
        (Hi, "सूखा प्रबंधन: नमी बनाए रखने के लिए मल्च करें। ड्रिप सिंचाई। सूखा प्रतिरोधी किस्में उगाएं।"),
        (Te, "కరువు నిర్వహణ: తేమ నిలుపుకోవడానికి మల్చ్ చేయండి। డ్రిప్ నీటిపారుదల।"),
        (Ta, "வறட்சி மேலாண்மை: ஈரப்பதம் தக்க வைக்க மல்ச் செய்யவும். சொட்டு நீர்."),
        (Bn, "খরা ব্যবস্থাপনা: আর্দ্রতা ধরে রাখতে মালচ করুন। ড্রিপ সেচ।"),
        (Mr, "दुष्काळ व्यवस्थापन: ओलावा टिकवण्यासाठी मल्च करा. ठिबक सिंचन."),
    ]),
    ("greeting", &[
        (En, "Hello! 👋 I'm your FarmaSathi AI helper. Ask me about: Weather, Market prices, Pests, Diseases, Fertilizers, Irrigation, Planting, Harvesting, Soil, Government schemes, or any farming question!"),
        (Hi, "नमस्ते! 👋 मैं आपका FarmaSathi AI सहायक हूं। मुझसे पूछें: मौसम, बाजार भाव, कीट, रोग, खाद, सिंचाई, बुवाई, कटाई, मिट्टी, सरकारी योजनाएं, या कोई भी खेती संबंधित सवाल!"),
        (Te, "నమస్కారం! 👋 నేను మీ FarmaSathi AI సహాయిని। నన్ను అడగండి: వాతావరణం, మార్కెట్ ధరలు, కీటకాలు, వ్యాధులు, ఎరవులు, నీరుపాటు, కోత, మణ్ణు, ప్రభుత్వ పథకాలు!"),
        (Ta, "வணக்கம்! 👋 நான் உங்கள் FarmaSathi AI உதவியாளர்। என்னிடம் கேளுங்கள்: வானிலை, சந்தை விலை, கீட்டுக்கள், நோய்கள், உரம், நீர்பசனம், அறுவடை, மண்ண், அரசு திட்டங்கள்!"),
        (Bn, "নমস্কার! 👋 আমি আপনার FarmaSathi AI সহায়ক। আমাকে জিজ্ঞাসা করুন: আবহাওয়া, বাজারের দাম, কীটপতঙ্গ, রোগ, সার, সেচ, ফসল কাটা, মাটি, সরকারি পরিকল্পনা!"),
        (Mr, "नमस्कार! 👋 मी तुमचा FarmaSathi AI सहाय्यक आहे। मला विचारा: हवामान, बाजार भाव, कीटक, रोग, खते, सिंचन, कापणी, माती, शासकीय योजना!"),
    ]),
    ("thanks_response", &[
        (En, "You're welcome! Happy farming! 🌾"),
        (Hi, "आपका स्वागत है! खुश खेती! 🌾"),
        (Te, "స్వాగతం! సంతోష వ్యవసాయం! 🌾"),
        (Ta, "வரவேற்கிறோம்! மகிழ்ச்சியான விவசாயம்! 🌾"),
        (Bn, "স্বাগতম! সুখী চাষাবাদ! 🌾"),
        (Mr, "स्वागत आहे! आनंदी शेती! 🌾"),
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_locale_entry_is_returned() {
        let catalog = ResponseCatalog::default();
        let text = catalog.message("thanks_response", Locale::Hi);
        assert_eq!(text, "आपका स्वागत है! खुश खेती! 🌾");
    }

    #[test]
    fn missing_locale_falls_back_to_english() {
        let catalog = ResponseCatalog::default();
        let english = catalog.message("scheme_pmkisan", Locale::En);
        assert_eq!(catalog.message("scheme_pmkisan", Locale::Ta), english);
        assert_eq!(catalog.message("scheme_pmkisan", Locale::Unknown), english);
    }

    #[test]
    fn missing_key_yields_placeholder() {
        let catalog = ResponseCatalog::default();
        assert_eq!(catalog.message("no_such_key", Locale::En), MISSING_TRANSLATION);
    }

    #[test]
    fn every_entry_has_an_english_variant() {
        let catalog = ResponseCatalog::default();
        for (key, _) in CATALOG {
            assert_ne!(
                catalog.message(key, Locale::En),
                MISSING_TRANSLATION,
                "missing en entry for {key}"
            );
        }
    }
}
