// src/models/stage.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// As etapas do funil de vendas, na ordem do pipeline.
// Esta é a enumeração canônica: a variante antiga do board (camelCase,
// nomes divergentes) foi aposentada e não é reconhecida aqui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Novo,
    Contato,
    Negociacao,
    Proposta,
    Ganho,
    Perdido,
    Desqualificado,
}

impl Stage {
    // Ordem de exibição das colunas do kanban.
    pub const ALL: [Stage; 7] = [
        Stage::Novo,
        Stage::Contato,
        Stage::Negociacao,
        Stage::Proposta,
        Stage::Ganho,
        Stage::Perdido,
        Stage::Desqualificado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Novo => "Novo",
            Stage::Contato => "Contato",
            Stage::Negociacao => "Negociacao",
            Stage::Proposta => "Proposta",
            Stage::Ganho => "Ganho",
            Stage::Perdido => "Perdido",
            Stage::Desqualificado => "Desqualificado",
        }
    }

    pub fn parse(raw: &str) -> Option<Stage> {
        Stage::ALL.iter().copied().find(|s| s.as_str() == raw.trim())
    }

    // Classificação TOTAL: qualquer status que o servidor mandar cai em
    // alguma coluna. Valor desconhecido vai para "Novo".
    pub fn classify(raw: &str) -> Stage {
        Stage::parse(raw).unwrap_or(Stage::Novo)
    }

    // Colunas terminais têm exibição limitada (ver funnel::partition).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Ganho | Stage::Perdido | Stage::Desqualificado)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_e_total_para_qualquer_string() {
        for raw in ["", "Contato", "lixo", "GANHO", "  Proposta  ", "😀"] {
            let stage = Stage::classify(raw);
            assert!(Stage::ALL.contains(&stage));
        }
    }

    #[test]
    fn status_desconhecido_vira_novo() {
        assert_eq!(Stage::classify("EmAndamento"), Stage::Novo);
        assert_eq!(Stage::classify(""), Stage::Novo);
    }

    #[test]
    fn parse_aceita_espacos_nas_pontas() {
        assert_eq!(Stage::parse(" Ganho "), Some(Stage::Ganho));
    }

    #[test]
    fn terminais_sao_exatamente_tres() {
        let terminais: Vec<_> = Stage::ALL.iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(
            terminais,
            vec![&Stage::Ganho, &Stage::Perdido, &Stage::Desqualificado]
        );
    }

    #[test]
    fn serializa_com_o_valor_do_wire() {
        assert_eq!(
            serde_json::to_string(&Stage::Negociacao).unwrap(),
            "\"Negociacao\""
        );
    }
}
