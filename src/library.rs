//! 물성별 시험 방법 참고 자료(지표 정의, 관련 표준, 시편 크기/개수, 표준 문서).
//! 내용은 참고용이며 실제 시험 시 최신 표준 원문으로 확인해야 한다.

use crate::condition::normalize_label;
use crate::importance::Property;

/// 내려받을 수 있는 표준 문서 파일.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    pub file_name: &'static str,
    /// 버튼 라벨
    pub label: &'static str,
    pub mime: &'static str,
}

#[derive(Debug)]
pub struct TestMethod {
    pub name: &'static str,
    pub metric: &'static str,
    pub standard: &'static str,
    pub sample_size: &'static str,
    pub specimens: u8,
    pub document: Option<&'static DocumentRef>,
}

#[derive(Debug)]
pub struct PropertyGroup {
    pub property: Property,
    pub methods: &'static [TestMethod],
}

const PDF: &str = "application/pdf";

pub static ASTM_F1868: DocumentRef = DocumentRef {
    file_name: "ASTM_F1868_Standard.pdf",
    label: "Download ASTM F1868 Standard (PDF)",
    mime: PDF,
};

pub static ASTM_D7984: DocumentRef = DocumentRef {
    file_name: "ASTM_D7984_Standard.pdf",
    label: "Download ASTM D7984 Standard (PDF)",
    mime: PDF,
};

pub static ISO_15496: DocumentRef = DocumentRef {
    file_name: "ISO_15496_Standard.pdf",
    label: "Download ISO 15496 Standard (PDF)",
    mime: PDF,
};

pub static AATCC_TM201: DocumentRef = DocumentRef {
    file_name: "AATCC TM_201_ Standard.pdf",
    label: "AATCC TM_201_ Standard (PDF)",
    mime: PDF,
};

pub static ASTM_D3776: DocumentRef = DocumentRef {
    file_name: "ASTM_D3776_Standard.pdf",
    label: "Download ASTM D3776 Standard (PDF)",
    mime: PDF,
};

pub static ISO_5084: DocumentRef = DocumentRef {
    file_name: "ISO_5084_Standard.pdf",
    label: "Download ISO 5084 Standard (PDF)",
    mime: PDF,
};

static ALL_DOCUMENTS: [&DocumentRef; 6] = [
    &ASTM_F1868,
    &ASTM_D7984,
    &ISO_15496,
    &AATCC_TM201,
    &ASTM_D3776,
    &ISO_5084,
];

static LIBRARY: &[PropertyGroup] = &[
    PropertyGroup {
        property: Property::Insulation,
        methods: &[
            TestMethod {
                name: "Thermal Insulation (Resistance)",
                metric: "Thermal resistance RCF, a quantity specific to textile materials or composites, determines the dry heat flux across a given area in response to a steady applied temperature gradient.",
                standard: "Sweating Guarded Hot Plate - ASTM F1868 - Part A",
                sample_size: "30cm X 30cm",
                specimens: 3,
                document: Some(&ASTM_F1868),
            },
            TestMethod {
                name: "Alternative Method - Modified Transient Plane Source (MTPS)",
                metric: "Using MTPS, thermal conductivity is measured. Having thickness of the material, thermal resistance is calculated.",
                standard: "MTPS - ASTM D7984",
                sample_size: "10cm X 10cm",
                specimens: 5,
                document: Some(&ASTM_D7984),
            },
        ],
    },
    PropertyGroup {
        property: Property::Breathability,
        methods: &[
            TestMethod {
                name: "Evaporative Resistance",
                metric: "Evaporative resistance REF, a quantity specific to textile materials or composites, determines the latent evaporative heat flux across a given area in response to a steady applied water-vapour pressure gradient.",
                standard: "Sweating Guarded Hot Plate - ASTM F1868 - Part B",
                sample_size: "30cm X 30cm",
                specimens: 3,
                document: Some(&ASTM_F1868),
            },
            TestMethod {
                name: "Water Vapor Transmission Rate",
                metric: "g/m²/h, the number of grams of sweat passing through a square meter of fabric in 24 hours.",
                standard: "Water Vapor Permeability Tester - ISO 15496",
                sample_size: "Three circular specimens of the fabric with diameter of approximately 180 mm",
                specimens: 3,
                document: Some(&ISO_15496),
            },
        ],
    },
    PropertyGroup {
        property: Property::MoistureManagement,
        methods: &[
            TestMethod {
                name: "Horizontal Wicking",
                metric: "Lengthwise and widthwise wicking distances in a certain time (2 or 5 minutes) for 1 mL of water.",
                standard: "Horizontal Wicking of Textiles - AATCC TM198",
                sample_size: "Flexible sample size - preferably larger than 18cm X 18cm",
                specimens: 3,
                document: None,
            },
            TestMethod {
                name: "Vertical Wicking",
                metric: "Time at a given vertical distance or vertical distance in a given time.",
                standard: "Vertical Wicking of Textiles - AATCC TM197",
                sample_size: "At least three samples of fabric in 18cm X 2.5cm size",
                specimens: 3,
                document: None,
            },
            TestMethod {
                name: "Dry Rate",
                metric: "Drying rate (mL/h) which indicates how quickly a fabric dries in a certain environment condition.",
                standard: "Test Method for Drying Rate of Fabrics - Heated Plate - AATCC TM201",
                sample_size: "Three specimens of the fabric with at least 20cm X 20cm size",
                specimens: 5,
                document: Some(&AATCC_TM201),
            },
            TestMethod {
                name: "Water Absorption",
                metric: "Absolute absorption per unit area (g·m⁻²) which indicates how much water a fabric can absorb per unit area in a certain time when immersed in water.",
                standard: "In-House Protocol",
                sample_size: "Three specimens of 3in X 3in",
                specimens: 3,
                document: None,
            },
        ],
    },
    PropertyGroup {
        property: Property::ThermalHand,
        methods: &[TestMethod {
            name: "Thermal Effusivity",
            metric: "Thermal effusivity (W·s½/m²·K), the ability of a fabric to exchange heat with skin on contact, which indicates how warm or cool the fabric feels to the touch.",
            standard: "Standard Test Method for Measurement of Thermal Effusivity of Fabrics - ASTM D7984",
            sample_size: "Five specimens of fabrics with flexible size",
            specimens: 5,
            document: Some(&ASTM_D7984),
        }],
    },
    PropertyGroup {
        property: Property::Density,
        methods: &[
            TestMethod {
                name: "Fabric Weight",
                metric: "Weight (gsm)",
                standard: "Standard Test Method for Mass Per Unit Area of Fabric - ASTM D3776",
                sample_size: "Die cut of 100 cm²",
                specimens: 3,
                document: Some(&ASTM_D3776),
            },
            TestMethod {
                name: "Fabric Thickness",
                metric: "Thickness (mm).",
                standard: "Determination of Thickness of Textiles and Textile Products - ISO 5084",
                sample_size: "Specimens of fabrics with flexible size",
                specimens: 5,
                document: Some(&ISO_5084),
            },
        ],
    },
];

pub fn groups() -> &'static [PropertyGroup] {
    LIBRARY
}

pub fn group(property: Property) -> Option<&'static PropertyGroup> {
    LIBRARY.iter().find(|g| g.property == property)
}

/// 시험 방법을 이름으로 찾는다(대소문자/공백 무시).
pub fn find_method(name: &str) -> Option<(&'static PropertyGroup, &'static TestMethod)> {
    let wanted = normalize_label(name);
    LIBRARY.iter().find_map(|g| {
        g.methods
            .iter()
            .find(|m| normalize_label(m.name) == wanted)
            .map(|m| (g, m))
    })
}

/// 중복 없는 표준 문서 목록.
pub fn documents() -> &'static [&'static DocumentRef] {
    &ALL_DOCUMENTS
}

/// 파일 이름으로 문서를 찾는다.
pub fn find_document(file_name: &str) -> Option<&'static DocumentRef> {
    let wanted = normalize_label(file_name);
    ALL_DOCUMENTS
        .iter()
        .copied()
        .find(|d| normalize_label(d.file_name) == wanted)
}

/// 해당 문서를 인용하는 (물성, 시험 방법) 목록.
pub fn methods_citing(doc: &DocumentRef) -> Vec<(Property, &'static TestMethod)> {
    LIBRARY
        .iter()
        .flat_map(|g| g.methods.iter().map(move |m| (g.property, m)))
        .filter(|(_, m)| m.document.is_some_and(|d| d == doc))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_property_has_a_group_in_axis_order() {
        let props: Vec<_> = groups().iter().map(|g| g.property).collect();
        assert_eq!(props, Property::ALL);
        assert!(groups().iter().all(|g| !g.methods.is_empty()));
    }

    #[test]
    fn every_cited_document_is_listed() {
        for g in groups() {
            for m in g.methods {
                if let Some(doc) = m.document {
                    assert!(documents().contains(&doc), "{} not listed", doc.file_name);
                }
            }
        }
    }

    #[test]
    fn offering_text_keeps_reference_wording() {
        let (_, wvtr) = find_method("Water Vapor Transmission Rate").unwrap();
        assert!(wvtr.metric.ends_with("in 24 hours."));
        assert_eq!(AATCC_TM201.label, "AATCC TM_201_ Standard (PDF)");
        assert_eq!(ASTM_F1868.label, "Download ASTM F1868 Standard (PDF)");
    }

    #[test]
    fn find_document_matches_spaced_name() {
        let doc = find_document("AATCC TM_201_ Standard.pdf").unwrap();
        assert_eq!(doc, &AATCC_TM201);
        assert!(find_document("missing.pdf").is_none());
    }
}
