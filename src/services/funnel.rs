// src/services/funnel.rs

use std::cmp::Ordering;

use crate::models::{Lead, Stage};

// Colunas terminais (Ganho/Perdido/Desqualificado) mostram no máximo isto;
// o excedente vira um contador de "mais N".
pub const TERMINAL_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct Column {
    pub leads: Vec<Lead>,
    // Quantos leads ficaram de fora do corte da coluna terminal.
    pub overflow: usize,
}

// O board particionado. Sempre carrega as 7 colunas, mesmo vazias —
// a UI nunca precisa checar se uma chave existe.
#[derive(Debug, Clone, Default)]
pub struct BoardColumns {
    cols: [Column; 7],
}

impl BoardColumns {
    pub fn column(&self, stage: Stage) -> &Column {
        &self.cols[stage as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, &Column)> {
        Stage::ALL.iter().copied().zip(self.cols.iter())
    }

    pub fn total(&self) -> usize {
        self.cols.iter().map(|c| c.leads.len() + c.overflow).sum()
    }
}

// Classificação pura e total: nunca falha, nunca toca rede.
pub fn classify(lead: &Lead) -> Stage {
    Stage::classify(&lead.status)
}

// Ordem dentro de uma coluna:
//  1. quem tem data de próximo contato vem primeiro, da mais atrasada
//     para a mais futura;
//  2. quem não tem data vem depois, do criado mais recente para o mais
//     antigo.
// created_at desempata o grupo com data.
fn display_order(a: &Lead, b: &Lead) -> Ordering {
    match (a.next_contact, b.next_contact) {
        (Some(da), Some(db)) => da.cmp(&db).then_with(|| b.created_at.cmp(&a.created_at)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.created_at.cmp(&a.created_at),
    }
}

// Particiona o snapshot do cache em colunas prontas para renderizar.
pub fn partition(leads: &[Lead]) -> BoardColumns {
    let mut board = BoardColumns::default();

    for lead in leads {
        let stage = classify(lead);
        board.cols[stage as usize].leads.push(lead.clone());
    }

    for (stage, col) in Stage::ALL.iter().zip(board.cols.iter_mut()) {
        col.leads.sort_by(display_order);
        if stage.is_terminal() && col.leads.len() > TERMINAL_DISPLAY_LIMIT {
            col.overflow = col.leads.len() - TERMINAL_DISPLAY_LIMIT;
            col.leads.truncate(TERMINAL_DISPLAY_LIMIT);
        }
    }

    board
}
