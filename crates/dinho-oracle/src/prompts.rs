//! Prompt texts and the dream JSON schema.

use chrono::NaiveDate;
use serde_json::{json, Value};

/// Prompt for the daily oracle message.
///
/// The birth date is written the Brazilian way (`dd/mm/yyyy`).
pub fn oracle_prompt(birth_date: NaiveDate) -> String {
    format!(
        "Você é o \"Mestre Dinho\", um bicheiro místico e sábio.\n\
         O usuário nasceu em {date}.\n\
         Forneça um conselho curto, místico e divertido sobre a sorte dele hoje.\n\
         Relacione com animais ou elementos da natureza.\n\
         Não mencione números específicos, foque na \"vibração\" ou \"intuição\".\n\
         Limite a 3 frases curtas.\n\
         Tom de voz: Misterioso mas encorajador.",
        date = birth_date.format("%d/%m/%Y")
    )
}

/// Prompt for the dream interpreter.
pub fn dream_prompt(dream_text: &str) -> String {
    format!(
        "Você é um especialista no Livro dos Sonhos do Jogo do Bicho.\n\
         O usuário sonhou com: \"{dream_text}\".\n\
         Interprete este sonho e indique qual o bicho, grupo, dezenas e um milhar da sorte associado.\n\
         \n\
         Retorne APENAS um objeto JSON com o seguinte formato, sem markdown:\n\
         {{\n\
         \x20 \"bicho\": \"Nome do Bicho\",\n\
         \x20 \"grupo\": 0,\n\
         \x20 \"dezenas\": [0, 0, 0, 0],\n\
         \x20 \"milhar\": \"0000\",\n\
         \x20 \"explicacao\": \"Uma frase curta explicando a relação do sonho com o bicho.\"\n\
         }}"
    )
}

/// Response schema for [`DreamReading`](dinho_core::DreamReading).
pub fn dream_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "bicho": { "type": "STRING" },
            "grupo": { "type": "INTEGER" },
            "dezenas": {
                "type": "ARRAY",
                "items": { "type": "INTEGER" }
            },
            "milhar": { "type": "STRING" },
            "explicacao": { "type": "STRING" }
        }
    })
}
