use chade::{Candidate, DataPaths, Inspection, InterpretationOutcome, Inspector, Representation};

use crate::cli::OutputFormat;

pub fn run(input: &[String], paths: &DataPaths, format: OutputFormat) -> Result<(), i32> {
    let inspector = Inspector::load(paths).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    let inspection = inspector.inspect(&input.join(" "));

    match format {
        OutputFormat::Text => print!("{}", render_text(&inspection)),
        OutputFormat::Json => println!("{}", to_json(&inspection)),
    }

    if inspection.is_recognized() {
        Ok(())
    } else {
        Err(1)
    }
}

fn write_representations(out: &mut String, representations: &[Representation], indent: &str) {
    for r in representations {
        out.push_str(&format!("{indent}Encoded as {}:\t{}\n", r.encoder, r.value));
    }
}

/// The report as plain text, one `Encoded as` line per representation.
pub fn render_text(inspection: &Inspection) -> String {
    let mut out = String::new();
    out.push_str(&format!("Argument: [{}]\n", inspection.input));

    let Some(interpreter) = &inspection.interpretation.interpreter else {
        out.push_str("Could not understand input\n");
        return out;
    };
    out.push_str(&format!("Interpreted as {interpreter}\n"));

    if let InterpretationOutcome::Codepoint(_) = inspection.interpretation.outcome {
        out.push('\n');
        for candidate in &inspection.candidates {
            write_representations(&mut out, &candidate.representations, "");
        }
        return out;
    }

    for candidate in &inspection.candidates {
        out.push_str(&format!("Decoded as [{}]:\n\n", candidate.decoders.join(" ")));
        write_representations(&mut out, &candidate.representations, "\t");
        out.push('\n');
    }
    for failure in &inspection.failures {
        out.push_str(&format!(
            "Can not be decoded as {} because {}\n",
            failure.decoder, failure.reason
        ));
    }
    out
}

fn candidate_to_json(candidate: &Candidate) -> serde_json::Value {
    let representations: Vec<serde_json::Value> = candidate
        .representations
        .iter()
        .map(|r| serde_json::json!({ "encoder": r.encoder, "value": r.value }))
        .collect();
    serde_json::json!({
        "codepoint": candidate.codepoint.value(),
        "hex": candidate.codepoint.to_string(),
        "decoders": candidate.decoders,
        "representations": representations,
    })
}

pub fn to_json(inspection: &Inspection) -> serde_json::Value {
    let failures: Vec<serde_json::Value> = inspection
        .failures
        .iter()
        .map(|f| serde_json::json!({ "decoder": f.decoder, "reason": f.reason }))
        .collect();
    serde_json::json!({
        "input": inspection.input,
        "interpreter": inspection.interpretation.interpreter,
        "candidates": inspection.candidates.iter().map(candidate_to_json).collect::<Vec<_>>(),
        "failures": failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chade::{Codepoint, DecodeFailure, Interpretation};

    fn representation(encoder: &str, value: &str) -> Representation {
        Representation {
            encoder: encoder.to_string(),
            value: value.to_string(),
        }
    }

    fn direct() -> Inspection {
        let cp = Codepoint::from('A');
        Inspection {
            input: "A".to_string(),
            interpretation: Interpretation::claimed("Character", InterpretationOutcome::Codepoint(cp)),
            candidates: vec![Candidate {
                codepoint: cp,
                decoders: Vec::new(),
                representations: vec![
                    representation("Character", "A"),
                    representation("ASCII", "(hex) 41"),
                ],
            }],
            failures: Vec::new(),
        }
    }

    fn decoded() -> Inspection {
        let cp = Codepoint::from('A');
        Inspection {
            input: "41".to_string(),
            interpretation: Interpretation::claimed(
                "Bytes",
                InterpretationOutcome::Bytes(chade::ByteSequence::new(vec![0x41]).unwrap()),
            ),
            candidates: vec![Candidate {
                codepoint: cp,
                decoders: vec!["ASCII".to_string(), "UTF-8".to_string()],
                representations: vec![representation("Character", "A")],
            }],
            failures: vec![DecodeFailure {
                decoder: "UTF-16LE".to_string(),
                reason: "unacceptable number of bytes".to_string(),
            }],
        }
    }

    // ========== text ==========

    #[test]
    fn text_for_direct_codepoint() {
        assert_eq!(
            render_text(&direct()),
            "Argument: [A]\n\
             Interpreted as Character\n\
             \n\
             Encoded as Character:\tA\n\
             Encoded as ASCII:\t(hex) 41\n"
        );
    }

    #[test]
    fn text_for_decoded_bytes() {
        assert_eq!(
            render_text(&decoded()),
            "Argument: [41]\n\
             Interpreted as Bytes\n\
             Decoded as [ASCII UTF-8]:\n\
             \n\
             \tEncoded as Character:\tA\n\
             \n\
             Can not be decoded as UTF-16LE because unacceptable number of bytes\n"
        );
    }

    #[test]
    fn text_for_unrecognized() {
        let inspection = Inspection {
            input: "what".to_string(),
            interpretation: Interpretation::unrecognized(),
            candidates: Vec::new(),
            failures: Vec::new(),
        };
        assert_eq!(
            render_text(&inspection),
            "Argument: [what]\nCould not understand input\n"
        );
    }

    // ========== json ==========

    #[test]
    fn json_shape() {
        let value = to_json(&decoded());
        assert_eq!(value["input"], "41");
        assert_eq!(value["interpreter"], "Bytes");
        assert_eq!(value["candidates"][0]["codepoint"], 65);
        assert_eq!(value["candidates"][0]["hex"], "41");
        assert_eq!(value["candidates"][0]["decoders"][1], "UTF-8");
        assert_eq!(value["candidates"][0]["representations"][0]["value"], "A");
        assert_eq!(value["failures"][0]["decoder"], "UTF-16LE");
    }

    #[test]
    fn json_unrecognized_has_null_interpreter() {
        let inspection = Inspection {
            input: String::new(),
            interpretation: Interpretation::unrecognized(),
            candidates: Vec::new(),
            failures: Vec::new(),
        };
        assert!(to_json(&inspection)["interpreter"].is_null());
    }
}
