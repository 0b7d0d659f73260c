mod portfolio;
mod propagators;
