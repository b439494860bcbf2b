use outerspace::models::*;
use serde_json::json;
use speculate2::speculate;

fn round_trip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let encoded = serde_json::to_string(value).expect("Failed to encode");
    serde_json::from_str(&encoded).expect("Failed to decode")
}

speculate! {
    describe "launch" {
        before {
            let launch = Launch {
                flight_number: 100,
                mission_name: "Mission X".to_string(),
                date_utc: "2023-01-01T12:00:00Z".to_string(),
                success: true,
                details: "Test mission".to_string(),
            };
        }

        it "survives a JSON round trip" {
            assert_eq!(round_trip(&launch), launch);
        }

        it "uses the catalog's name key for the mission" {
            let value = serde_json::to_value(&launch).expect("Failed to encode");
            assert_eq!(value["name"], "Mission X");
            assert!(value.get("mission_name").is_none());
        }

        it "keeps the date as text" {
            let decoded: Launch = serde_json::from_value(json!({
                "flight_number": 1,
                "name": "FalconSat",
                "date_utc": "2006-03-24T22:30:00.000Z"
            })).expect("Failed to decode");
            assert_eq!(decoded.date_utc, "2006-03-24T22:30:00.000Z");
            assert_eq!(decoded.details, "");
        }
    }

    describe "rocket" {
        before {
            let rocket = Rocket {
                id: "5e9d0d95eda69973a809d1ec".to_string(),
                name: "Falcon 9".to_string(),
                description: "Two-stage".to_string(),
                height: Height { meters: 70.0 },
                mass: Mass { kg: 549_054 },
            };
        }

        it "survives a JSON round trip" {
            assert_eq!(round_trip(&rocket), rocket);
        }

        it "keeps the nested height and mass shape" {
            let value = serde_json::to_value(&rocket).expect("Failed to encode");
            assert_eq!(value["height"]["meters"], 70.0);
            assert_eq!(value["mass"]["kg"], 549_054);
        }

        it "decodes null measurements as zero" {
            let decoded: Rocket = serde_json::from_value(json!({
                "id": "1",
                "name": "Starship",
                "height": null,
                "mass": {"kg": null}
            })).expect("Failed to decode");
            assert_eq!(decoded.height.meters, 0.0);
            assert_eq!(decoded.mass.kg, 0);
        }

        it "projects to a summary with only id and name" {
            let summary = RocketSummary::from(&rocket);
            assert_eq!(serde_json::to_value(&summary).expect("Failed to encode"), json!({
                "id": "5e9d0d95eda69973a809d1ec",
                "name": "Falcon 9"
            }));
        }
    }

    describe "summarize" {
        it "keeps catalog order" {
            let rockets = vec![
                Rocket { id: "b".to_string(), name: "Second".to_string(), ..Rocket::default() },
                Rocket { id: "a".to_string(), name: "First".to_string(), ..Rocket::default() },
            ];
            let ids: Vec<String> = summarize(rockets).into_iter().map(|s| s.id).collect();
            assert_eq!(ids, vec!["b", "a"]);
        }

        it "returns an empty list for an empty catalog" {
            assert!(summarize(Vec::new()).is_empty());
        }
    }

    describe "math fact" {
        it "survives a JSON round trip" {
            let fact = MathFact {
                text: "42 is the meaning of life".to_string(),
                number: 42,
                found: true,
                kind: "math".to_string(),
            };
            assert_eq!(round_trip(&fact), fact);
        }

        it "serializes the category under type" {
            let value = serde_json::to_value(MathFact { kind: "math".to_string(), ..MathFact::default() })
                .expect("Failed to encode");
            assert_eq!(value["type"], "math");
        }

        it "decodes null fields as defaults" {
            let decoded: MathFact = serde_json::from_value(json!({
                "text": null,
                "number": 7,
                "found": null,
                "type": null
            })).expect("Failed to decode");
            assert_eq!(decoded, MathFact { number: 7, ..MathFact::default() });
        }
    }

    describe "astronomy picture" {
        it "survives a JSON round trip" {
            let apod = Apod {
                title: "Pillars of Creation".to_string(),
                date: "2024-05-01".to_string(),
                explanation: "Columns of gas and dust".to_string(),
                url: "https://apod.nasa.gov/apod/image/pillars.jpg".to_string(),
                media_type: "image".to_string(),
                service_version: "v1".to_string(),
            };
            assert_eq!(round_trip(&apod), apod);
        }

        it "tolerates a missing media url" {
            let decoded: Apod = serde_json::from_value(json!({
                "title": "A video day",
                "date": "2024-05-02",
                "explanation": "Moving pictures",
                "media_type": "other",
                "service_version": "v1"
            })).expect("Failed to decode");
            assert_eq!(decoded.url, "");
            assert_eq!(decoded.media_type, "other");
        }

        it "decodes a null media url as empty" {
            let decoded: Apod = serde_json::from_value(json!({
                "title": "A video day",
                "url": null,
                "explanation": null
            })).expect("Failed to decode");
            assert_eq!(decoded.title, "A video day");
            assert_eq!(decoded.url, "");
            assert_eq!(decoded.explanation, "");
        }
    }
}
