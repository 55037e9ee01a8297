use crate::commands::{CmdMessage, CmdResult, CustomerDraft};
use crate::error::{LojinhaError, Result};
use crate::model::Customer;
use crate::store::{StorageBackend, Store};

pub fn add<B: StorageBackend>(store: &mut Store<B>, draft: CustomerDraft) -> Result<CmdResult> {
    if draft.name.trim().is_empty() {
        return Err(LojinhaError::Input("nome não pode ser vazio".to_string()));
    }

    let customer = Customer::new(draft.name, draft.email, draft.phone);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cliente cadastrado: {}",
        customer.name
    )));
    let listed = customer.clone();
    store.customers.push(customer);
    store.persist()?;

    Ok(result.with_customers(vec![listed]))
}

pub fn list<B: StorageBackend>(store: &Store<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_customers(store.customers.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::empty_store;

    fn draft(name: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.to_string(),
            email: "maria@exemplo.com".to_string(),
            phone: "(11) 98888-7777".to_string(),
        }
    }

    #[test]
    fn add_appends_and_lists() {
        let mut store = empty_store();
        add(&mut store, draft("Maria Silva")).unwrap();

        let result = list(&store).unwrap();
        assert_eq!(result.customers.len(), 1);
        assert_eq!(result.customers[0].name, "Maria Silva");
        assert!(!result.customers[0].id.is_empty());
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut store = empty_store();
        assert!(add(&mut store, draft("  ")).is_err());
        assert!(store.customers.is_empty());
    }
}
