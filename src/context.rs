use crate::model::{BuildingToPlace, PlacementAction, PlacementState};
use yew::prelude::*;

/// Placement state shared with views through a `ContextProvider`.
///
/// `set_active_view` / `set_active_content` come from whoever mounts the
/// provider. They are handed to consumers as-is; nothing here emits them.
#[derive(Clone, PartialEq)]
pub struct PlacementContext {
    state: PlacementState,
    dispatch: Callback<PlacementAction>,
    set_active_view: Option<Callback<String>>,
    set_active_content: Option<Callback<String>>,
}

impl PlacementContext {
    /// `state` is the snapshot views read; transitions go through `dispatch`.
    pub fn new(
        state: PlacementState,
        dispatch: Callback<PlacementAction>,
        set_active_view: Option<Callback<String>>,
        set_active_content: Option<Callback<String>>,
    ) -> Self {
        Self {
            state,
            dispatch,
            set_active_view,
            set_active_content,
        }
    }

    pub fn building_to_place(&self) -> Option<&BuildingToPlace> {
        self.state.building_to_place()
    }

    pub fn placement_mode(&self) -> bool {
        self.state.placement_mode()
    }

    pub fn start_building_placement(&self, building: BuildingToPlace) {
        self.dispatch.emit(PlacementAction::Start(building));
    }

    pub fn cancel_building_placement(&self) {
        self.dispatch.emit(PlacementAction::Cancel);
    }

    pub fn complete_building_placement(&self) {
        self.dispatch.emit(PlacementAction::Complete);
    }

    pub fn set_active_view(&self) -> Option<&Callback<String>> {
        self.set_active_view.as_ref()
    }

    pub fn set_active_content(&self) -> Option<&Callback<String>> {
        self.set_active_content.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct PlacementProviderProps {
    #[prop_or_default]
    pub set_active_view: Option<Callback<String>>,
    #[prop_or_default]
    pub set_active_content: Option<Callback<String>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PlacementProvider)]
pub fn placement_provider(props: &PlacementProviderProps) -> Html {
    let state = use_reducer(PlacementState::default);
    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: PlacementAction| dispatcher.dispatch(action))
    };
    let ctx = PlacementContext::new(
        (*state).clone(),
        dispatch,
        props.set_active_view.clone(),
        props.set_active_content.clone(),
    );
    html! {
        <ContextProvider<PlacementContext> context={ctx}>
            { for props.children.iter() }
        </ContextProvider<PlacementContext>>
    }
}

/// `None` when called outside a `PlacementProvider`.
#[hook]
pub fn use_placement() -> Option<PlacementContext> {
    use_context::<PlacementContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Reducible;

    fn counting(hits: &Rc<Cell<u32>>) -> Callback<String> {
        let hits = hits.clone();
        Callback::from(move |_: String| hits.set(hits.get() + 1))
    }

    /// Context wired to a local reducer, like the provider does with `use_reducer`.
    fn context_with(
        view: Option<Callback<String>>,
        content: Option<Callback<String>>,
    ) -> (PlacementContext, Rc<RefCell<Rc<PlacementState>>>) {
        let store = Rc::new(RefCell::new(Rc::new(PlacementState::default())));
        let dispatch = {
            let store = store.clone();
            Callback::from(move |action: PlacementAction| {
                let cur = store.borrow().clone();
                *store.borrow_mut() = cur.reduce(action);
            })
        };
        let ctx = PlacementContext::new(PlacementState::default(), dispatch, view, content);
        (ctx, store)
    }

    fn den() -> BuildingToPlace {
        BuildingToPlace {
            id: "den".into(),
            name: "Bear Den".into(),
            icon: "🏠".into(),
            kind: "building".into(),
        }
    }

    #[test]
    fn transitions_never_emit_owner_callbacks() {
        let view_hits = Rc::new(Cell::new(0));
        let content_hits = Rc::new(Cell::new(0));
        let (ctx, store) = context_with(Some(counting(&view_hits)), Some(counting(&content_hits)));

        ctx.start_building_placement(den());
        assert!(store.borrow().placement_mode());
        ctx.complete_building_placement();
        ctx.start_building_placement(den());
        ctx.cancel_building_placement();
        ctx.cancel_building_placement();

        assert!(!store.borrow().placement_mode());
        assert_eq!(view_hits.get(), 0);
        assert_eq!(content_hits.get(), 0);
    }

    #[test]
    fn owner_callbacks_are_forwarded_unchanged() {
        let view_hits = Rc::new(Cell::new(0));
        let content_hits = Rc::new(Cell::new(0));
        let view = counting(&view_hits);
        let content = counting(&content_hits);
        let (ctx, _) = context_with(Some(view.clone()), Some(content.clone()));

        assert_eq!(ctx.set_active_view(), Some(&view));
        assert_eq!(ctx.set_active_content(), Some(&content));

        // Consumers emit them; the owner sees the calls.
        if let Some(cb) = ctx.set_active_view() {
            cb.emit("village".into());
        }
        assert_eq!(view_hits.get(), 1);
        assert_eq!(content_hits.get(), 0);
    }

    #[test]
    fn missing_owner_callbacks_stay_none() {
        let (ctx, _) = context_with(None, None);
        assert!(ctx.set_active_view().is_none());
        assert!(ctx.set_active_content().is_none());
        ctx.start_building_placement(den());
    }
}
