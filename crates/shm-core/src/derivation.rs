//! Static derivation content shown in the reference panel: the six steps
//! from uniform circular motion to the SHM equation. Loaded once, never
//! mutated by the core.

#[derive(Clone, Copy, Debug)]
pub struct DerivationStep {
    pub id: u32,
    pub title: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const DERIVATION_STEPS: &[DerivationStep] = &[
    DerivationStep {
        id: 1,
        title: "Angular Position",
        formula: "theta = w*t",
        description: "The particle moves along the circle with constant angular \
            velocity w. Its angle theta increases linearly with time.",
    },
    DerivationStep {
        id: 2,
        title: "Vertical Projection",
        formula: "y = r sin(theta)",
        description: "The shadow's height on the vertical screen is the projection \
            of the radius vector onto the y-axis.",
    },
    DerivationStep {
        id: 3,
        title: "Displacement Equation",
        formula: "y(t) = r sin(w*t)",
        description: "Substituting theta = w*t gives the vertical position of the \
            shadow as a sinusoidal function of time.",
    },
    DerivationStep {
        id: 4,
        title: "Velocity",
        formula: "v_y = dy/dt = r*w cos(w*t)",
        description: "The vertical velocity of the shadow is the derivative of its \
            position, oscillating with phase shifted by 90 degrees.",
    },
    DerivationStep {
        id: 5,
        title: "Acceleration",
        formula: "a_y = dv_y/dt = -r*w^2 sin(w*t)",
        description: "Differentiating velocity reveals that acceleration is \
            proportional to the negative of the displacement.",
    },
    DerivationStep {
        id: 6,
        title: "SHM Conclusion",
        formula: "a = -w^2 * y",
        description: "Since y = r sin(w*t), we find a = -w^2*y. This confirms the \
            shadow performs Simple Harmonic Motion.",
    },
];
