use leptos::prelude::*;

use crate::controls::{
    BorderRadiusControl, BoxShadowControl, ElementControl, FilterControl, GradientControl,
    PropertySection, TransformControl,
};

/// Control column: one collapsible section per property group.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar">
            <PropertySection title="Element" icon_name="type" default_open=true>
                <ElementControl />
            </PropertySection>
            <PropertySection title="Box Shadow" icon_name="box" default_open=true>
                <BoxShadowControl />
            </PropertySection>
            <PropertySection title="Border Radius" icon_name="circle">
                <BorderRadiusControl />
            </PropertySection>
            <PropertySection title="Transform" icon_name="move">
                <TransformControl />
            </PropertySection>
            <PropertySection title="Gradient" icon_name="palette">
                <GradientControl />
            </PropertySection>
            <PropertySection title="Filter" icon_name="sliders">
                <FilterControl />
            </PropertySection>
        </div>
    }
}
