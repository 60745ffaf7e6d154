use soroban_sdk::{Env, Map, Vec};
use crate::founders;
use crate::storage::{BPS_PER_SLOT, SLOT_CYCLE};
use crate::types::{Founder, Recipient};

// ============================================================================
// TABELA DE ALOCAÇÃO (100 SLOTS)
// ============================================================================

/// Monta a tabela `base_slot -> founder id`.
///
/// Cada founder recebe `ownership_bps / 100` slots, espaçados com passo
/// `100 / slots` a partir de `start % 100`. Founders são processados em ordem
/// crescente de id; um slot já ocupado desliza para o próximo livre.
///
/// A soma dos bps é <= 10000, então sempre existe um slot livre para cada
/// atribuição.
pub fn build_schedule(env: &Env, founders: &Vec<Founder>, start: u32) -> Map<u32, u32> {
    let mut table: Map<u32, u32> = Map::new(env);

    for founder in founders.iter() {
        let slots = founder.ownership_bps / BPS_PER_SLOT;
        if slots == 0 {
            continue;
        }

        let stride = SLOT_CYCLE / slots;
        let mut base_slot = start % SLOT_CYCLE;

        for _ in 0..slots {
            base_slot = next_free_slot(&table, base_slot);
            table.set(base_slot, founder.id);
            base_slot = (base_slot + stride) % SLOT_CYCLE;
        }
    }

    table
}

fn next_free_slot(table: &Map<u32, u32>, mut slot: u32) -> u32 {
    while table.contains_key(slot) {
        slot = (slot + 1) % SLOT_CYCLE;
    }
    slot
}

pub fn base_slot(token_id: u32) -> u32 {
    token_id % SLOT_CYCLE
}

// ============================================================================
// RESOLUÇÃO
// ============================================================================

/// Decide o destino de `token_id`. Função pura do estado dos founders e do
/// timestamp atual; não escreve nada.
pub fn resolve(env: &Env, token_id: u32) -> Recipient {
    match founders::scheduled_recipient(env, token_id) {
        Some(founder) => Recipient::Founder(founder.id),
        None => Recipient::Auction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec, Address};

    fn founder(env: &Env, id: u32, bps: u32) -> Founder {
        Founder {
            id,
            wallet: Address::generate(env),
            ownership_bps: bps,
            vest_expiry: u64::MAX,
        }
    }

    fn slots_of(table: &Map<u32, u32>, id: u32) -> u32 {
        table.values().iter().filter(|f| *f == id).count() as u32
    }

    #[test]
    fn test_single_founder_evenly_spaced() {
        let env = Env::default();
        let table = build_schedule(&env, &vec![&env, founder(&env, 0, 1_000)], 0);

        assert_eq!(table.len(), 10);
        for slot in [0u32, 10, 20, 30, 40, 50, 60, 70, 80, 90] {
            assert_eq!(table.get(slot), Some(0));
        }
        assert_eq!(table.get(1), None);
    }

    #[test]
    fn test_collision_slides_to_next_free_slot() {
        let env = Env::default();
        let founders = vec![&env, founder(&env, 0, 1_000), founder(&env, 1, 500)];
        let table = build_schedule(&env, &founders, 0);

        assert_eq!(slots_of(&table, 0), 10);
        assert_eq!(slots_of(&table, 1), 5);
        // 0 está ocupado pelo founder 0, então o founder 1 começa em 1
        assert_eq!(table.get(1), Some(1));
        assert_eq!(table.get(21), Some(1));
        assert_eq!(table.get(81), Some(1));
    }

    #[test]
    fn test_fractional_percent_is_truncated() {
        let env = Env::default();
        let founders = vec![&env, founder(&env, 0, 250), founder(&env, 1, 99)];
        let table = build_schedule(&env, &founders, 0);

        assert_eq!(slots_of(&table, 0), 2);
        assert_eq!(slots_of(&table, 1), 0);
        assert_eq!(table.get(0), Some(0));
        assert_eq!(table.get(50), Some(0));
    }

    #[test]
    fn test_full_ownership_fills_every_slot() {
        let env = Env::default();
        let founders = vec![
            &env,
            founder(&env, 0, 3_300),
            founder(&env, 1, 3_300),
            founder(&env, 2, 3_400),
        ];
        let table = build_schedule(&env, &founders, 0);

        assert_eq!(table.len(), SLOT_CYCLE);
        assert_eq!(slots_of(&table, 0), 33);
        assert_eq!(slots_of(&table, 1), 33);
        assert_eq!(slots_of(&table, 2), 34);
    }

    #[test]
    fn test_start_offset_shifts_first_slot() {
        let env = Env::default();
        let table = build_schedule(&env, &vec![&env, founder(&env, 0, 200)], 130);

        assert_eq!(table.get(30), Some(0));
        assert_eq!(table.get(80), Some(0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let env = Env::default();
        let founders = vec![&env, founder(&env, 0, 700), founder(&env, 1, 1_300)];
        assert_eq!(
            build_schedule(&env, &founders, 0),
            build_schedule(&env, &founders, 0)
        );
    }

    #[test]
    fn test_base_slot() {
        assert_eq!(base_slot(0), 0);
        assert_eq!(base_slot(99), 99);
        assert_eq!(base_slot(100), 0);
        assert_eq!(base_slot(1_234), 34);
    }
}
